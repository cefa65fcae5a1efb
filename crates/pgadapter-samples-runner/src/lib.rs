//! PGAdapter samples runner.
//!
//! Reads configuration from the environment, connects to PGAdapter (starting
//! the emulator container when no endpoint is configured), and runs the
//! selected samples.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
