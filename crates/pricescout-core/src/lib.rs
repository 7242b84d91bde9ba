//! Shared domain types and configuration for pricescout.

mod app_config;
mod config;
mod offer;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use offer::Offer;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
