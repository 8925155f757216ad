//! # Spriint Projects
//!
//! Managers that validate and orchestrate CRUD over projects, epics, and
//! issues, plus the axum router that exposes them over HTTP.

pub mod api;
pub mod db;
pub mod manager;

pub use db::DbState;

// Re-export manager types
pub use manager::{
    EntityKind, EpicManager, IssueFields, IssueManager, ManagerError, ManagerResult,
    ProjectManager,
};

// Re-export domain types from core
pub use spriint_core::{
    Epic, EpicView, Issue, IssueType, IssueView, Project, ProjectCounts, Status, ValidationError,
};

// Re-export storage types
pub use spriint_storage::{StorageConfig, StorageError, StorageResult};
