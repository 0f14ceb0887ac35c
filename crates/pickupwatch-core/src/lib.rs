use thiserror::Error;

pub mod app_config;
pub mod availability;
pub mod config;

pub use app_config::AppConfig;
pub use availability::{days_until_label, merge_availability, share_message, AvailabilityRecord};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
