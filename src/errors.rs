use pocketbook_config::ConfigError;
use thiserror::Error;

use crate::services::ServiceError;

/// Top-level error surfaced by the CLI.
#[derive(Debug, Error)]
pub enum PocketbookError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
