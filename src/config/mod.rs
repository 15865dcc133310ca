//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ClassifierConfig, LogFormat, LoggingConfig, ReportConfig, ServerConfig,
};
