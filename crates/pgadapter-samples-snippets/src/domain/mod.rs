//! Domain layer for the snippets.

pub mod statements;
