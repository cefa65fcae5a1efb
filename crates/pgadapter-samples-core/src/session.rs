//! SQL session abstraction.

use async_trait::async_trait;

use crate::error::SampleError;

/// An open, authenticated database session.
///
/// Implementations forward each call as one network round trip. Statements
/// are sent as raw SQL, so `execute` accepts multi-statement scripts and
/// PGAdapter control statements such as `start batch ddl`.
#[async_trait]
pub trait SqlSession: Send {
    /// Runs a query returning a single `bigint` value (e.g. `SELECT COUNT(1)`).
    async fn query_count(&mut self, sql: &str) -> Result<i64, SampleError>;

    /// Executes one or more statements without parameters.
    async fn execute(&mut self, sql: &str) -> Result<(), SampleError>;

    /// Releases the session.
    async fn close(self) -> Result<(), SampleError>
    where
        Self: Sized;
}
