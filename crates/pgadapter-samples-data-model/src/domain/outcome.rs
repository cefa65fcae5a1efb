//! Result of a data model run.

use serde::Serialize;

/// What `create_data_model` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataModelOutcome {
    /// All expected tables were present; no DDL was issued.
    AlreadyExists,
    /// The DDL script was executed.
    Created,
}

impl DataModelOutcome {
    /// Returns `true` if the DDL script was executed.
    #[must_use]
    pub fn created(self) -> bool {
        matches!(self, Self::Created)
    }
}
