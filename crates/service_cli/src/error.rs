//! CLI error types.

use thiserror::Error;
use xlpricer_models::analytical::AnalyticalError;
use xlpricer_models::market::SnapshotError;
use xlpricer_registry::RegistryError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command-line argument was malformed or unsupported.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Snapshot construction rejected the inputs.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The pricing kernel rejected the inputs.
    #[error(transparent)]
    Pricing(#[from] AnalyticalError),

    /// Registry dispatch failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
