use std::sync::Arc;

use spriint_core::{validate_named_entity, Epic, EpicCreateInput, EpicUpdateInput, EpicView, Project};
use spriint_storage::{EpicRepository, ProjectRepository};
use tracing::info;
use uuid::Uuid;

use super::{ensure_valid, require_project, EntityKind, ManagerError, ManagerResult};

/// Validates and orchestrates CRUD over epics within a project
pub struct EpicManager {
    projects: Arc<dyn ProjectRepository>,
    epics: Arc<dyn EpicRepository>,
}

impl EpicManager {
    pub fn new(projects: Arc<dyn ProjectRepository>, epics: Arc<dyn EpicRepository>) -> Self {
        Self { projects, epics }
    }

    /// Epics that belong to another project are treated as missing.
    async fn require_epic(&self, project: &Project, public_id: Uuid) -> ManagerResult<Epic> {
        match self.epics.get_epic(public_id).await? {
            Some(epic) if epic.project_id == project.id => Ok(epic),
            _ => Err(ManagerError::NotFound(EntityKind::Epic)),
        }
    }

    pub async fn create_epic(
        &self,
        project_id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ManagerResult<EpicView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        ensure_valid(validate_named_entity(name, description))?;

        let epic = self
            .epics
            .create_epic(EpicCreateInput {
                project_id: project.id,
                name: name.unwrap_or_default().to_string(),
                description: description.map(str::to_string),
            })
            .await?;

        info!(
            "Created epic '{}' with ID {} in project {}",
            epic.name, epic.public_id, project.public_id
        );
        Ok(EpicView { epic, project })
    }

    pub async fn list_epics(&self, project_id: Uuid) -> ManagerResult<Vec<EpicView>> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let epics = self.epics.list_epics(project.id).await?;

        Ok(epics
            .into_iter()
            .map(|epic| EpicView {
                epic,
                project: project.clone(),
            })
            .collect())
    }

    pub async fn get_epic(&self, project_id: Uuid, epic_id: Uuid) -> ManagerResult<EpicView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let epic = self.require_epic(&project, epic_id).await?;
        Ok(EpicView { epic, project })
    }

    pub async fn update_epic(
        &self,
        project_id: Uuid,
        epic_id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ManagerResult<EpicView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        self.require_epic(&project, epic_id).await?;
        ensure_valid(validate_named_entity(name, description))?;

        let epic = self
            .epics
            .update_epic(
                epic_id,
                EpicUpdateInput {
                    name: name.unwrap_or_default().to_string(),
                    description: description.map(str::to_string),
                },
            )
            .await?;

        info!("Updated epic '{}' (ID: {})", epic.name, epic.public_id);
        Ok(EpicView { epic, project })
    }

    pub async fn delete_epic(&self, project_id: Uuid, epic_id: Uuid) -> ManagerResult<()> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let epic = self.require_epic(&project, epic_id).await?;
        self.epics.delete_epic(epic_id).await?;

        info!("Deleted epic '{}' (ID: {})", epic.name, epic.public_id);
        Ok(())
    }
}
