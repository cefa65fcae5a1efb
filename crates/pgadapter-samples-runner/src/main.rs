//! PGAdapter samples entry point.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use pgadapter_samples_runner::config::RunnerConfig;
use pgadapter_samples_runner::runner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from environment.
    let config = RunnerConfig::from_env()?;
    tracing::info!(sample = ?config.sample, database = %config.database, "Starting PGAdapter samples");

    let report = runner::run(&config).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
