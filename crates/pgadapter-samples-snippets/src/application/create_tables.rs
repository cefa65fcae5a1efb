//! Creates the `singers` and `albums` tables in one DDL batch.

use tracing::{info, warn};

use pgadapter_samples_core::error::SampleError;
use pgadapter_samples_core::session::SqlSession;
use pgadapter_samples_postgres::connect::{connect_options, connect_single};
use pgadapter_samples_postgres::pg_session::PgConnectionSession;

use crate::domain::statements::{CREATE_TABLES_BATCH, SNIPPET_TABLES};

/// Connects to PGAdapter at `host:port`, creates the `singers` and `albums`
/// tables in `database` in one DDL batch, and closes the connection.
///
/// Returns the names of the created tables.
///
/// # Errors
///
/// Returns `SampleError::Database` if connecting, any statement of the
/// batch, or closing the connection fails.
pub async fn create_tables(
    host: &str,
    port: u16,
    database: &str,
) -> Result<Vec<&'static str>, SampleError> {
    let options = connect_options(host, port, database);
    let session = PgConnectionSession::new(connect_single(&options).await?);
    create_tables_in(session, database).await
}

/// Runs the create-tables batch on an already open session and closes it.
///
/// The session is closed whether or not the batch succeeds. When both the
/// batch and the close fail, the batch error is returned.
///
/// # Errors
///
/// Returns the first error of the batch, or the close error.
pub async fn create_tables_in<S>(
    mut session: S,
    database: &str,
) -> Result<Vec<&'static str>, SampleError>
where
    S: SqlSession,
{
    let result = run_batch(&mut session).await;
    let closed = session.close().await;

    match (result, closed) {
        (Ok(()), Ok(())) => {
            info!("Created Singers & Albums tables in database: [{database}]");
            Ok(SNIPPET_TABLES.to_vec())
        }
        (Ok(()), Err(err)) => Err(err),
        (Err(err), closed) => {
            if let Err(close_err) = closed {
                warn!(error = %close_err, "closing connection after failed batch");
            }
            Err(err)
        }
    }
}

async fn run_batch<S>(session: &mut S) -> Result<(), SampleError>
where
    S: SqlSession,
{
    for statement in CREATE_TABLES_BATCH {
        session.execute(statement).await?;
    }
    Ok(())
}
