//! `sqlx` implementations of the `SqlSession` trait.

use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tracing::debug;

use pgadapter_samples_core::error::SampleError;
use pgadapter_samples_core::session::SqlSession;

/// Session backed by a connection pool. Each call acquires a pooled
/// connection for the duration of the round trip.
#[derive(Debug, Clone)]
pub struct PgPoolSession {
    pool: PgPool,
}

impl PgPoolSession {
    /// Creates a new `PgPoolSession`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SqlSession for PgPoolSession {
    async fn query_count(&mut self, sql: &str) -> Result<i64, SampleError> {
        debug!(sql, "query count");
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(SampleError::database)
    }

    async fn execute(&mut self, sql: &str) -> Result<(), SampleError> {
        debug!(sql, "execute");
        sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map_err(SampleError::database)?;
        Ok(())
    }

    async fn close(self) -> Result<(), SampleError> {
        self.pool.close().await;
        Ok(())
    }
}

/// Session backed by one direct connection.
#[derive(Debug)]
pub struct PgConnectionSession {
    conn: PgConnection,
}

impl PgConnectionSession {
    /// Creates a new `PgConnectionSession`.
    #[must_use]
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SqlSession for PgConnectionSession {
    async fn query_count(&mut self, sql: &str) -> Result<i64, SampleError> {
        debug!(sql, "query count");
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&mut self.conn)
            .await
            .map_err(SampleError::database)
    }

    async fn execute(&mut self, sql: &str) -> Result<(), SampleError> {
        debug!(sql, "execute");
        self.conn
            .execute(sqlx::raw_sql(sql))
            .await
            .map_err(SampleError::database)?;
        Ok(())
    }

    async fn close(self) -> Result<(), SampleError> {
        self.conn.close().await.map_err(SampleError::database)
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use pgadapter_samples_core::session::SqlSession;

    use super::{PgConnectionSession, PgPoolSession};

    fn assert_send<F: Future + Send>(_: F) {}

    fn session_futures_are_send<S: SqlSession>(mut session: S) {
        assert_send(async move {
            let _ = session.query_count("SELECT 1").await;
            let _ = session.execute("SELECT 1").await;
            let _ = session.close().await;
        });
    }

    #[test]
    fn test_sessions_can_run_inside_spawned_tasks() {
        // Both sessions must drive their statements from a `Send` future.
        let _pool: fn(PgPoolSession) = session_futures_are_send::<PgPoolSession>;
        let _conn: fn(PgConnectionSession) = session_futures_are_send::<PgConnectionSession>;
    }
}
