//! Runs the selected samples.

use tracing::{info, warn};

use pgadapter_samples_core::session::SqlSession;
use pgadapter_samples_data_model::application::initializer::create_data_model;
use pgadapter_samples_data_model::domain::outcome::DataModelOutcome;
use pgadapter_samples_emulator::start_pg_adapter;
use pgadapter_samples_postgres::connect::{connect_options, connect_pool};
use pgadapter_samples_postgres::pg_session::PgPoolSession;
use pgadapter_samples_snippets::application::create_tables::create_tables;

use crate::config::{Endpoint, RunnerConfig};
use crate::error::AppError;
use crate::report::RunReport;

/// Runs the configured samples and returns a report.
///
/// When the endpoint is the emulator, the container is started first and
/// stopped after the samples ran, also when a sample failed.
///
/// # Errors
///
/// Returns `AppError` if the emulator cannot be started or stopped, or if a
/// sample fails.
pub async fn run(config: &RunnerConfig) -> Result<RunReport, AppError> {
    match &config.endpoint {
        Endpoint::Existing { host, port } => run_samples(config, host, *port, false).await,
        Endpoint::Emulator(emulator_config) => {
            let emulator = start_pg_adapter(emulator_config).await?;
            let result = run_samples(config, emulator.host(), emulator.port(), true).await;
            let stopped = emulator.stop().await;
            match (result, stopped) {
                (Ok(report), Ok(())) => Ok(report),
                (Ok(_), Err(err)) => Err(err.into()),
                (Err(err), stopped) => {
                    if let Err(stop_err) = stopped {
                        warn!(error = %stop_err, "stopping emulator after failed run");
                    }
                    Err(err)
                }
            }
        }
    }
}

async fn run_samples(
    config: &RunnerConfig,
    host: &str,
    port: u16,
    emulator: bool,
) -> Result<RunReport, AppError> {
    let data_model = if config.sample.runs_data_model() {
        Some(run_data_model(host, port, &config.database).await?)
    } else {
        None
    };

    let (snippet_database, created_tables) = if config.sample.runs_create_tables() {
        let database = config.snippet_database();
        let tables = create_tables(host, port, &database).await?;
        (Some(database), Some(tables))
    } else {
        (None, None)
    };

    Ok(RunReport {
        host: host.to_owned(),
        port,
        database: config.database.clone(),
        emulator,
        data_model,
        snippet_database,
        created_tables,
    })
}

async fn run_data_model(host: &str, port: u16, database: &str) -> Result<DataModelOutcome, AppError> {
    let pool = connect_pool(connect_options(host, port, database)).await?;
    let mut session = PgPoolSession::new(pool);
    let result = create_data_model(&mut session).await;
    let closed = session.close().await;
    let outcome = result?;
    closed?;
    info!(?outcome, database, "data model sample finished");
    Ok(outcome)
}
