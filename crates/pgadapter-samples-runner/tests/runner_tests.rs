//! End-to-end tests for the runner against the PGAdapter emulator.
//!
//! These need Docker and registry access: `cargo test -- --ignored`.

use pgadapter_samples_data_model::domain::outcome::DataModelOutcome;
use pgadapter_samples_emulator::EmulatorConfig;
use pgadapter_samples_runner::config::{Endpoint, RunnerConfig, Sample};
use pgadapter_samples_runner::runner::run;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_run_all_samples_on_emulator() {
    let config = RunnerConfig {
        endpoint: Endpoint::Emulator(EmulatorConfig::default()),
        database: "runner-db".into(),
        sample: Sample::All,
    };

    let report = run(&config).await.unwrap();

    assert!(report.emulator);
    assert_eq!(report.database, "runner-db");
    assert_eq!(report.data_model, Some(DataModelOutcome::Created));
    assert_eq!(report.snippet_database.as_deref(), Some("runner-db-snippets"));
    assert_eq!(report.created_tables, Some(vec!["singers", "albums"]));
}
