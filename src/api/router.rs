use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::security_headers_middleware;
use super::predict;
use super::species;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the API routes with application state
pub fn create_router_with_state(state: AppState) -> Router {
    with_layers(api_routes(state))
}

/// Create the full application: API routes, landing page and static assets
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let index = config.public_dir.join("index.html");

    let router = api_routes(state)
        .route_service("/", ServeFile::new(&index))
        .nest_service(
            "/static",
            ServeDir::new(&config.public_dir).fallback(ServeFile::new(&index)),
        );

    with_layers(router).layer(DefaultBodyLimit::max(config.max_upload_bytes))
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Identification and catalog
        .route("/predict", post(predict::predict))
        .route("/species", get(species::list_species))
        .route("/species/{fish}", get(species::get_species))
        .route("/download/{fish}", get(species::download_report))
        .with_state(state)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}
