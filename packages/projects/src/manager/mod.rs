// ABOUTME: Managers that validate requests and orchestrate repository calls
// ABOUTME: Existence checks run first, then aggregated field validation, then persistence

use std::fmt;

use spriint_core::{format_errors, Project, ValidationError};
use spriint_storage::{ProjectRepository, StorageError};
use thiserror::Error;
use uuid::Uuid;

mod epics;
mod issues;
mod projects;

pub use epics::EpicManager;
pub use issues::{IssueFields, IssueManager};
pub use projects::ProjectManager;

/// Which kind of record a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Epic,
    Issue,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Project => write!(f, "project"),
            EntityKind::Epic => write!(f, "epic"),
            EntityKind::Issue => write!(f, "issue"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("The input was not valid. Errors: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
    #[error("The requested resource could not be found.")]
    NotFound(EntityKind),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Resolve a project by public ID or fail with `NotFound`
pub(crate) async fn require_project(
    projects: &dyn ProjectRepository,
    public_id: Uuid,
) -> ManagerResult<Project> {
    projects
        .get_project(public_id)
        .await?
        .ok_or(ManagerError::NotFound(EntityKind::Project))
}

pub(crate) fn ensure_valid(errors: Vec<ValidationError>) -> ManagerResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ManagerError::Validation(errors))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_generic() {
        let err = ManagerError::NotFound(EntityKind::Epic);
        assert_eq!(err.to_string(), "The requested resource could not be found.");
    }

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = ManagerError::Validation(vec![
            ValidationError::new("name", "Must be set."),
            ValidationError::new("description", "Must be shorter than 512 characters."),
        ]);
        assert_eq!(
            err.to_string(),
            "The input was not valid. Errors: [ name: Must be set., description: Must be shorter than 512 characters. ]"
        );
    }
}
