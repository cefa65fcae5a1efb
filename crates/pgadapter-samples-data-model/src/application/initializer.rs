//! Data model initializer.

use tracing::info;

use pgadapter_samples_core::error::SampleError;
use pgadapter_samples_core::session::SqlSession;

use crate::domain::outcome::DataModelOutcome;
use crate::domain::schema::{
    COUNT_EXISTING_TABLES, CREATE_DATA_MODEL, EXPECTED_TABLE_COUNT, EXPECTED_TABLES,
};

/// Creates the data model unless every expected table already exists.
///
/// Only table names are checked. A schema where some, but not all, of the
/// tables exist is not repaired; the DDL script then fails on the first
/// table it cannot create and that error is returned.
///
/// # Errors
///
/// Returns `SampleError::Database` if the catalog query or the DDL script
/// fails.
pub async fn create_data_model<S>(session: &mut S) -> Result<DataModelOutcome, SampleError>
where
    S: SqlSession + ?Sized,
{
    info!("checking whether tables already exist");
    let existing = session.query_count(COUNT_EXISTING_TABLES).await?;
    if existing == EXPECTED_TABLE_COUNT {
        info!(existing, "data model already exists");
        return Ok(DataModelOutcome::AlreadyExists);
    }

    info!(existing, "creating tables");
    session.execute(CREATE_DATA_MODEL).await?;
    info!(tables = ?EXPECTED_TABLES, "created data model");

    Ok(DataModelOutcome::Created)
}

#[cfg(test)]
mod tests {
    use pgadapter_samples_core::error::SampleError;
    use pgadapter_samples_test_support::{FailingSession, RecordingSession};

    use crate::application::initializer::create_data_model;
    use crate::domain::outcome::DataModelOutcome;
    use crate::domain::schema::{COUNT_EXISTING_TABLES, CREATE_DATA_MODEL};

    #[tokio::test]
    async fn test_create_data_model_creates_tables_in_empty_database() {
        // Arrange
        let mut session = RecordingSession::new(0);
        let log = session.log();

        // Act
        let result = create_data_model(&mut session).await;

        // Assert
        assert_eq!(result.unwrap(), DataModelOutcome::Created);
        let statements = log.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], COUNT_EXISTING_TABLES);
        assert_eq!(statements[1], CREATE_DATA_MODEL);
    }

    #[tokio::test]
    async fn test_create_data_model_skips_ddl_when_all_tables_exist() {
        // Arrange
        let mut session = RecordingSession::new(6);
        let log = session.log();

        // Act
        let result = create_data_model(&mut session).await;

        // Assert
        assert_eq!(result.unwrap(), DataModelOutcome::AlreadyExists);
        assert_eq!(log.statements(), vec![COUNT_EXISTING_TABLES.to_owned()]);
    }

    #[tokio::test]
    async fn test_create_data_model_runs_ddl_when_only_some_tables_exist() {
        // Arrange
        let mut session = RecordingSession::new(3);
        let log = session.log();

        // Act
        let result = create_data_model(&mut session).await;

        // Assert
        assert_eq!(result.unwrap(), DataModelOutcome::Created);
        assert_eq!(log.statements().len(), 2);
    }

    #[tokio::test]
    async fn test_create_data_model_propagates_ddl_error() {
        // Arrange
        let mut session = RecordingSession::new(0).failing_on("create table \"Singers\"");
        let log = session.log();

        // Act
        let result = create_data_model(&mut session).await;

        // Assert
        match result {
            Err(SampleError::Database(err)) => {
                assert!(err.to_string().contains("statement rejected"));
            }
            other => panic!("expected Database error, got {other:?}"),
        }
        assert_eq!(log.statements().len(), 2);
    }

    #[tokio::test]
    async fn test_create_data_model_propagates_catalog_query_error() {
        // Arrange
        let mut session = FailingSession::default();
        let log = session.log();

        // Act
        let result = create_data_model(&mut session).await;

        // Assert
        assert!(matches!(result, Err(SampleError::Database(_))));
        assert_eq!(log.statements(), vec![COUNT_EXISTING_TABLES.to_owned()]);
    }
}
