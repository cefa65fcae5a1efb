//! Run report printed by the runner.

use pgadapter_samples_data_model::domain::outcome::DataModelOutcome;
use serde::Serialize;

/// Summary of one runner invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Host the samples connected to.
    pub host: String,
    /// Port the samples connected to.
    pub port: u16,
    /// Database the samples ran against.
    pub database: String,
    /// Whether the emulator container was started for this run.
    pub emulator: bool,
    /// Outcome of the data model sample, if it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_model: Option<DataModelOutcome>,
    /// Database the create-tables snippet ran against, if it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_database: Option<String>,
    /// Tables created by the create-tables snippet, if it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_tables: Option<Vec<&'static str>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_omits_samples_that_did_not_run() {
        let report = RunReport {
            host: "localhost".into(),
            port: 5432,
            database: "example-db".into(),
            emulator: false,
            data_model: Some(DataModelOutcome::AlreadyExists),
            snippet_database: None,
            created_tables: None,
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "host": "localhost",
                "port": 5432,
                "database": "example-db",
                "emulator": false,
                "data_model": "already_exists"
            })
        );
    }
}
