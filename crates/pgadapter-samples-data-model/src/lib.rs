//! PGAdapter samples — data model.
//!
//! Creates the Singers/Albums/Tracks/Venues/Concerts/TicketSales schema,
//! skipping creation when all six tables are already present.

pub mod application;
pub mod domain;
