//! Classify command - identifies one image file from disk

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::api::types::PredictResponse;
use crate::infrastructure::services::IdentificationService;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Image file to identify (JPEG, PNG, ...)
    pub image: PathBuf,
}

/// Identify the image and print the prediction and species profile as JSON
pub async fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    let state = crate::create_app_state_with_config(&config).await?;

    let response = classify_file(&state.identification_service, &args.image).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

async fn classify_file(
    service: &IdentificationService,
    image: &Path,
) -> anyhow::Result<PredictResponse> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("Failed to read image {}", image.display()))?;

    let identification = service.identify(bytes).await?;
    info!(
        image = %image.display(),
        species_key = identification.species_key(),
        "Image classified"
    );

    Ok(PredictResponse::from_domain(&identification))
}
