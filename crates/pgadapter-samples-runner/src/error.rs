//! PGAdapter samples runner — error types.

use pgadapter_samples_core::error::SampleError;
use thiserror::Error;

/// Startup and runtime errors for the runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable or argument is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sample failed.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// The run report could not be serialized.
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
}
