//! Test sessions — mock `SqlSession` implementations for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pgadapter_samples_core::error::SampleError;
use pgadapter_samples_core::session::SqlSession;

#[derive(Debug, Default)]
struct LogState {
    statements: Vec<String>,
    closed: bool,
}

/// Shared view of everything a test session was asked to do. Stays readable
/// after the session itself was consumed by `close`.
#[derive(Debug, Clone, Default)]
pub struct SessionLog(Arc<Mutex<LogState>>);

impl SessionLog {
    /// Returns every statement sent through the session, in order. Count
    /// queries and executed scripts are both included.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        self.0.lock().unwrap().statements.clone()
    }

    /// Returns `true` once `close` was called on the session.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.0.lock().unwrap().closed
    }

    fn record(&self, sql: &str) {
        self.0.lock().unwrap().statements.push(sql.to_owned());
    }

    fn mark_closed(&self) {
        self.0.lock().unwrap().closed = true;
    }
}

/// A session that records every statement. `query_count` always returns the
/// configured count; `execute` succeeds unless the statement contains the
/// configured failure marker.
#[derive(Debug)]
pub struct RecordingSession {
    count: i64,
    fail_marker: Option<String>,
    log: SessionLog,
}

impl RecordingSession {
    /// Create a recording session whose count queries return `count`.
    #[must_use]
    pub fn new(count: i64) -> Self {
        Self {
            count,
            fail_marker: None,
            log: SessionLog::default(),
        }
    }

    /// Makes `execute` fail for any statement containing `marker`. The
    /// failing statement is still recorded.
    #[must_use]
    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_owned());
        self
    }

    /// Returns a handle on the session's log.
    #[must_use]
    pub fn log(&self) -> SessionLog {
        self.log.clone()
    }
}

#[async_trait]
impl SqlSession for RecordingSession {
    async fn query_count(&mut self, sql: &str) -> Result<i64, SampleError> {
        self.log.record(sql);
        Ok(self.count)
    }

    async fn execute(&mut self, sql: &str) -> Result<(), SampleError> {
        self.log.record(sql);
        match &self.fail_marker {
            Some(marker) if sql.contains(marker.as_str()) => Err(SampleError::database(
                format!("statement rejected: {marker}"),
            )),
            _ => Ok(()),
        }
    }

    async fn close(self) -> Result<(), SampleError> {
        self.log.mark_closed();
        Ok(())
    }
}

/// A session whose queries and statements always fail with a database
/// error. Closing still succeeds and is recorded.
#[derive(Debug, Default)]
pub struct FailingSession {
    log: SessionLog,
}

impl FailingSession {
    /// Returns a handle on the session's log.
    #[must_use]
    pub fn log(&self) -> SessionLog {
        self.log.clone()
    }
}

#[async_trait]
impl SqlSession for FailingSession {
    async fn query_count(&mut self, sql: &str) -> Result<i64, SampleError> {
        self.log.record(sql);
        Err(SampleError::database("connection refused"))
    }

    async fn execute(&mut self, sql: &str) -> Result<(), SampleError> {
        self.log.record(sql);
        Err(SampleError::database("connection refused"))
    }

    async fn close(self) -> Result<(), SampleError> {
        self.log.mark_closed();
        Ok(())
    }
}
