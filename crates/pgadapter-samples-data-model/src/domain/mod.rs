//! Domain layer for the data model.

pub mod outcome;
pub mod schema;
