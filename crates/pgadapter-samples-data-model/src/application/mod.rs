//! Application layer for the data model.

pub mod initializer;
