//! PGAdapter emulator bootstrapper.
//!
//! Pulls and starts the `pgadapter-emulator` image, which runs PGAdapter
//! together with the Cloud Spanner emulator, and exposes its `PostgreSQL`
//! port on an ephemeral host port.

pub mod config;
pub mod container;

pub use config::{EmulatorConfig, PullPolicy};
pub use container::{PgAdapterEmulator, start_pg_adapter};
