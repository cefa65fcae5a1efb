//! `PostgreSQL` wire-protocol sessions for the PGAdapter samples.
//!
//! Implements `SqlSession` on top of `sqlx`, both for a connection pool and
//! for a single direct connection.

pub mod connect;
pub mod pg_session;
