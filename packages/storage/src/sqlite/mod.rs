use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{StorageError, StorageResult};

mod epics;
mod issues;
mod projects;

pub use epics::SqliteEpicRepository;
pub use issues::SqliteIssueRepository;
pub use projects::SqliteProjectRepository;

fn parse_uuid(value: &str) -> StorageResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| StorageError::InvalidData(format!("bad public id '{}': {}", value, e)))
}

fn parse_timestamp(value: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::InvalidData(format!("bad timestamp '{}': {}", value, e)))
}
