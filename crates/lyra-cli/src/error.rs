//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Model file could not be loaded
    #[error("Model error: {0}")]
    Model(#[from] lyra_model::ModelError),

    /// Validator configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] lyra_validator::ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
