// ABOUTME: Domain types and validation rules for Spriint
// ABOUTME: Shared by the storage layer, the managers, and the HTTP API

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{
    Epic, EpicCreateInput, EpicUpdateInput, EpicView, Issue, IssueCreateInput, IssueType,
    IssueUpdateInput, IssueView, ParseEnumError, Project, ProjectCounts, ProjectCreateInput,
    ProjectUpdateInput, Status,
};

// Re-export constants
pub use constants::{default_database_path, spriint_dir, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH};

// Re-export validation
pub use validation::{format_errors, validate_named_entity, ValidationError};
