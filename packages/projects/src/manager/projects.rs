use std::sync::Arc;

use spriint_core::{
    validate_named_entity, Project, ProjectCounts, ProjectCreateInput, ProjectUpdateInput,
};
use spriint_storage::ProjectRepository;
use tracing::info;
use uuid::Uuid;

use super::{ensure_valid, require_project, ManagerResult};

/// Validates and orchestrates CRUD over projects
pub struct ProjectManager {
    projects: Arc<dyn ProjectRepository>,
}

impl ProjectManager {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn create_project(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ManagerResult<Project> {
        ensure_valid(validate_named_entity(name, description))?;

        let project = self
            .projects
            .create_project(ProjectCreateInput {
                name: name.unwrap_or_default().to_string(),
                description: description.map(str::to_string),
            })
            .await?;

        info!("Created project '{}' with ID {}", project.name, project.public_id);
        Ok(project)
    }

    pub async fn list_projects(&self) -> ManagerResult<Vec<Project>> {
        Ok(self.projects.list_projects().await?)
    }

    pub async fn get_project(&self, public_id: Uuid) -> ManagerResult<Project> {
        require_project(self.projects.as_ref(), public_id).await
    }

    pub async fn get_project_counts(&self, public_id: Uuid) -> ManagerResult<ProjectCounts> {
        let project = require_project(self.projects.as_ref(), public_id).await?;
        Ok(self.projects.get_project_counts(project.id).await?)
    }

    /// The project must exist before its fields are validated.
    pub async fn update_project(
        &self,
        public_id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ManagerResult<Project> {
        require_project(self.projects.as_ref(), public_id).await?;
        ensure_valid(validate_named_entity(name, description))?;

        let project = self
            .projects
            .update_project(
                public_id,
                ProjectUpdateInput {
                    name: name.unwrap_or_default().to_string(),
                    description: description.map(str::to_string),
                },
            )
            .await?;

        info!("Updated project '{}' (ID: {})", project.name, project.public_id);
        Ok(project)
    }

    pub async fn delete_project(&self, public_id: Uuid) -> ManagerResult<()> {
        let project = require_project(self.projects.as_ref(), public_id).await?;
        self.projects.delete_project(public_id).await?;

        info!("Deleted project '{}' (ID: {})", project.name, project.public_id);
        Ok(())
    }
}
