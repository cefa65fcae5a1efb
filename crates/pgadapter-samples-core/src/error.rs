//! Sample error types.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed native error of an external collaborator (driver, container runtime).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Top-level error type returned by every sample.
///
/// The samples never classify or retry failures. The native error of the
/// collaborator that failed is kept as the `source`.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Connecting to or executing a statement on the database failed.
    #[error("database error: {0}")]
    Database(#[source] BoxError),

    /// Pulling, starting, or stopping the emulator container failed.
    #[error("container error: {0}")]
    Container(#[source] BoxError),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SampleError {
    /// Wraps a driver error.
    pub fn database(err: impl Into<BoxError>) -> Self {
        Self::Database(err.into())
    }

    /// Wraps a container runtime error.
    pub fn container(err: impl Into<BoxError>) -> Self {
        Self::Container(err.into())
    }
}
