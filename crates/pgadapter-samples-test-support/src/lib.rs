//! Shared test sessions and utilities for the PGAdapter samples.

mod session;

pub use session::{FailingSession, RecordingSession, SessionLog};
