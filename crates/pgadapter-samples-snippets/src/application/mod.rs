//! Application layer for the snippets.

pub mod create_tables;
