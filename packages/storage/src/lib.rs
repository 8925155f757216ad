// ABOUTME: SQLite persistence for projects, epics, and issues
// ABOUTME: Exposes repository traits the managers depend on and their sqlx implementations

use spriint_core::ParseEnumError;
use thiserror::Error;

pub mod pool;
pub mod repository;
pub mod sqlite;

pub use pool::{connect, connect_in_memory, run_migrations, StorageConfig};
pub use repository::{EpicRepository, IssueRepository, ProjectRepository};
pub use sqlite::{SqliteEpicRepository, SqliteIssueRepository, SqliteProjectRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockEpicRepository, MockIssueRepository, MockProjectRepository};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid stored value: {0}")]
    InvalidData(String),
    #[error("Record not found")]
    NotFound,
}

impl From<ParseEnumError> for StorageError {
    fn from(err: ParseEnumError) -> Self {
        StorageError::InvalidData(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use spriint_core::Status;

    #[test]
    fn test_unknown_stored_enum_is_invalid_data() {
        let err: StorageError = Status::try_from(9).unwrap_err().into();
        assert!(matches!(err, StorageError::InvalidData(ref msg) if msg == "Unknown status: 9"));
    }
}
