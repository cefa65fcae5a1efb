//! Connection setup for a PGAdapter endpoint.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};
use tracing::info;

use pgadapter_samples_core::error::SampleError;

/// Default maximum number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Builds connect options for a host/port/database triple.
///
/// PGAdapter in front of the emulator does not authenticate, so no
/// credentials are set here. `PGUSER`/`PGPASSWORD` are still honoured by
/// `sqlx` when present.
#[must_use]
pub fn connect_options(host: &str, port: u16, database: &str) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(database)
}

/// Opens a connection pool.
///
/// # Errors
///
/// Returns `SampleError::Database` if the first connection cannot be
/// established.
pub async fn connect_pool(options: PgConnectOptions) -> Result<PgPool, SampleError> {
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database(),
        "connecting pool to PGAdapter"
    );
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(SampleError::database)
}

/// Opens a single direct connection.
///
/// # Errors
///
/// Returns `SampleError::Database` if the connection cannot be established.
pub async fn connect_single(options: &PgConnectOptions) -> Result<PgConnection, SampleError> {
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database(),
        "connecting to PGAdapter"
    );
    PgConnection::connect_with(options)
        .await
        .map_err(SampleError::database)
}
