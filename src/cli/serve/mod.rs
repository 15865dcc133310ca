//! Serve command - runs the HTTP server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::config::ServerConfig;

/// Run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let config = super::load_config();

    let state = crate::create_app_state_with_config(&config).await?;
    let app = create_router(state, &config.server);

    let addr = build_socket_addr(&config.server)?;
    info!(
        public_dir = %config.server.public_dir.display(),
        max_upload_bytes = config.server.max_upload_bytes,
        "Starting server on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.host.parse::<std::net::IpAddr>()?,
        config.port,
    )))
}
