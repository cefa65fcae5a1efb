//! PGAdapter samples core — shared abstractions.
//!
//! This crate defines the session trait the samples execute their SQL
//! through, and the error type every sample returns. It contains no
//! driver code.

pub mod error;
pub mod session;
