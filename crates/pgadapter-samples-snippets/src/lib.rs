//! PGAdapter samples — snippets.
//!
//! Small self-contained samples that open their own connection to
//! PGAdapter, do one thing, and close the connection again.

pub mod application;
pub mod domain;
