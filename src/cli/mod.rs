//! CLI module for FishTantra
//!
//! Provides subcommands:
//! - `serve`: HTTP server with the landing page
//! - `classify`: identify a single image file
//! - `export`: write a species profile report to disk

pub mod classify;
pub mod export;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// FishTantra - fish species identification and aquaculture profiles
#[derive(Parser)]
#[command(name = "fishtantra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Identify the species in an image file and print the result as JSON
    Classify(classify::ClassifyArgs),

    /// Write the PDF profile of a species
    Export(export::ExportArgs),
}

/// Load `.env` and layered configuration, then install logging
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}
