//! Runner configuration, read from environment variables.

use std::str::FromStr;
use std::time::Duration;

use pgadapter_samples_core::error::SampleError;
use pgadapter_samples_emulator::{EmulatorConfig, PullPolicy};

use crate::error::AppError;

/// Suffix of the database the create-tables snippet uses when it runs
/// together with the data model.
pub const SNIPPET_DATABASE_SUFFIX: &str = "-snippets";

/// Database used when `PGADAPTER_DATABASE` is not set.
pub const DEFAULT_DATABASE: &str = "example-db";

/// Port used when `PGADAPTER_HOST` is set without `PGADAPTER_PORT`.
pub const DEFAULT_PORT: u16 = 5432;

/// Which samples to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sample {
    /// Create the Singers/Albums/Tracks/Venues/Concerts/TicketSales data model.
    #[default]
    DataModel,
    /// Create the `singers` and `albums` tables in one DDL batch.
    CreateTables,
    /// Both, data model first.
    All,
}

impl Sample {
    /// Returns `true` if the data model sample runs.
    #[must_use]
    pub fn runs_data_model(self) -> bool {
        matches!(self, Self::DataModel | Self::All)
    }

    /// Returns `true` if the create-tables snippet runs.
    #[must_use]
    pub fn runs_create_tables(self) -> bool {
        matches!(self, Self::CreateTables | Self::All)
    }
}

impl FromStr for Sample {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-model" => Ok(Self::DataModel),
            "create-tables" => Ok(Self::CreateTables),
            "all" => Ok(Self::All),
            other => Err(AppError::Config(format!(
                "unknown sample '{other}', expected 'data-model', 'create-tables' or 'all'"
            ))),
        }
    }
}

/// Where the samples connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A PGAdapter instance that is already running.
    Existing {
        /// Host name or address.
        host: String,
        /// Port.
        port: u16,
    },
    /// Start PGAdapter with the Cloud Spanner emulator in a container.
    Emulator(EmulatorConfig),
}

/// Complete runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Endpoint to connect to.
    pub endpoint: Endpoint,
    /// Database name.
    pub database: String,
    /// Samples to run.
    pub sample: Sample,
}

impl RunnerConfig {
    /// Database the create-tables snippet runs against.
    ///
    /// The data model and the snippet both create a singers and an albums
    /// table, and Spanner schema names are case-insensitive, so with
    /// `Sample::All` the snippet gets its own database.
    #[must_use]
    pub fn snippet_database(&self) -> String {
        match self.sample {
            Sample::All => format!("{}{SNIPPET_DATABASE_SUFFIX}", self.database),
            Sample::DataModel | Sample::CreateTables => self.database.clone(),
        }
    }

    /// Reads the configuration from the process environment and the first
    /// command-line argument.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if a variable or the argument is invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok(), std::env::args().nth(1))
    }

    /// Builds the configuration from a variable lookup and an optional
    /// sample argument.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if a variable or the argument is invalid.
    pub fn from_lookup<F>(lookup: F, sample_arg: Option<String>) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sample = sample_arg.as_deref().map_or(Ok(Sample::default()), str::parse::<Sample>)?;
        let database = lookup("PGADAPTER_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_owned());
        if database.trim().is_empty() {
            return Err(AppError::Config(
                "PGADAPTER_DATABASE must not be empty".into(),
            ));
        }

        let endpoint = match lookup("PGADAPTER_HOST") {
            Some(host) => {
                let port = match lookup("PGADAPTER_PORT") {
                    Some(port) => port
                        .parse()
                        .map_err(|e| AppError::Config(format!("PGADAPTER_PORT must be a valid u16: {e}")))?,
                    None => DEFAULT_PORT,
                };
                Endpoint::Existing { host, port }
            }
            None => Endpoint::Emulator(emulator_config(&lookup)?),
        };

        Ok(Self {
            endpoint,
            database,
            sample,
        })
    }
}

fn emulator_config<F>(lookup: &F) -> Result<EmulatorConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EmulatorConfig::default();
    if let Some(policy) = lookup("PGADAPTER_PULL_POLICY") {
        config.pull_policy = policy
            .parse::<PullPolicy>()
            .map_err(|e| match e {
                SampleError::Config(msg) => AppError::Config(format!("PGADAPTER_PULL_POLICY: {msg}")),
                other => AppError::Sample(other),
            })?;
    }
    if let Some(secs) = lookup("PGADAPTER_STARTUP_TIMEOUT_SECS") {
        let secs: u64 = secs.parse().map_err(|e| {
            AppError::Config(format!(
                "PGADAPTER_STARTUP_TIMEOUT_SECS must be a whole number of seconds: {e}"
            ))
        })?;
        config.startup_timeout = Duration::from_secs(secs);
    }
    Ok(config)
}
