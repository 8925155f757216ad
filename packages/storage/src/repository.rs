use async_trait::async_trait;
use spriint_core::{
    Epic, EpicCreateInput, EpicUpdateInput, Issue, IssueCreateInput, IssueUpdateInput, Project,
    ProjectCounts, ProjectCreateInput, ProjectUpdateInput, Status,
};
use uuid::Uuid;

use crate::StorageResult;

/// Persistence for projects.
///
/// Lookups return `Ok(None)` when nothing matches. Mutations on a row that no
/// longer exists fail with `StorageError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<Project>;
    async fn list_projects(&self) -> StorageResult<Vec<Project>>;
    async fn get_project(&self, public_id: Uuid) -> StorageResult<Option<Project>>;
    async fn get_project_counts(&self, project_id: i64) -> StorageResult<ProjectCounts>;
    async fn update_project(
        &self,
        public_id: Uuid,
        input: ProjectUpdateInput,
    ) -> StorageResult<Project>;
    async fn delete_project(&self, public_id: Uuid) -> StorageResult<()>;
}

/// Persistence for epics
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait EpicRepository: Send + Sync {
    async fn create_epic(&self, input: EpicCreateInput) -> StorageResult<Epic>;
    async fn list_epics(&self, project_id: i64) -> StorageResult<Vec<Epic>>;
    async fn get_epic(&self, public_id: Uuid) -> StorageResult<Option<Epic>>;
    async fn get_epic_by_id(&self, id: i64) -> StorageResult<Option<Epic>>;
    async fn update_epic(&self, public_id: Uuid, input: EpicUpdateInput) -> StorageResult<Epic>;
    async fn delete_epic(&self, public_id: Uuid) -> StorageResult<()>;
}

/// Persistence for issues
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait IssueRepository: Send + Sync {
    async fn create_issue(&self, input: IssueCreateInput) -> StorageResult<Issue>;
    async fn list_issues(&self, project_id: i64) -> StorageResult<Vec<Issue>>;
    async fn get_issue(&self, public_id: Uuid) -> StorageResult<Option<Issue>>;
    async fn update_issue(&self, public_id: Uuid, input: IssueUpdateInput)
        -> StorageResult<Issue>;
    async fn update_issue_status(&self, public_id: Uuid, status: Status) -> StorageResult<Issue>;
    async fn delete_issue(&self, public_id: Uuid) -> StorageResult<()>;
}
