//! Export command - writes a species profile report to disk

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::domain::{NameNormalizer, SpeciesCatalog};
use crate::infrastructure::services::SpeciesService;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Species key, common name or scientific name (e.g. "catla", "Labeo rohita")
    pub fish: String,

    /// Destination file; defaults to `<species key>.pdf` in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Render the species report and write it to the output path
pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    let service = crate::create_species_service(
        &config,
        Arc::new(SpeciesCatalog::builtin()),
        Arc::new(NameNormalizer::builtin()),
    );

    let path = export_report(&service, &args.fish, args.output.as_deref()).await?;
    println!("{}", path.display());

    Ok(())
}

async fn export_report(
    service: &SpeciesService,
    fish: &str,
    output: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let report = service.export(fish)?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&report.file_name));

    tokio::fs::write(&path, &report.bytes)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(
        fish = %fish,
        path = %path.display(),
        bytes = report.bytes.len(),
        "Species report written"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;

    fn service() -> SpeciesService {
        crate::create_species_service(
            &AppConfig::default(),
            Arc::new(SpeciesCatalog::builtin()),
            Arc::new(NameNormalizer::builtin()),
        )
    }

    #[tokio::test]
    async fn test_export_to_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rohu-profile.pdf");

        let path = export_report(&service(), "Labeo rohita", Some(&output))
            .await
            .unwrap();

        assert_eq!(path, output);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_export_unknown_species() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tilapia.pdf");

        let err = export_report(&service(), "tilapia", Some(&output))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Species not found"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("catla.pdf");

        let err = export_report(&service(), "catla", Some(&output))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to write report"));
    }
}
