use std::sync::Arc;

use spriint_core::validation::{
    validate_description, validate_name, INVALID_EPIC_ID, INVALID_ISSUE_TYPE, INVALID_STATUS,
};
use spriint_core::{
    Epic, Issue, IssueCreateInput, IssueType, IssueUpdateInput, IssueView, Project, Status,
    ValidationError,
};
use spriint_storage::{EpicRepository, IssueRepository, ProjectRepository};
use tracing::info;
use uuid::Uuid;

use super::{require_project, EntityKind, ManagerError, ManagerResult};

/// Raw, unvalidated issue fields as supplied by a caller
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueFields<'a> {
    /// Public epic ID. Blank counts as absent.
    pub epic_id: Option<&'a str>,
    pub issue_type: Option<&'a str>,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub estimate: Option<i32>,
}

struct ValidatedIssue {
    epic: Option<Epic>,
    issue_type: IssueType,
    name: String,
    description: Option<String>,
    status: Status,
    estimate: Option<i32>,
}

/// Validates and orchestrates CRUD over issues within a project
pub struct IssueManager {
    projects: Arc<dyn ProjectRepository>,
    epics: Arc<dyn EpicRepository>,
    issues: Arc<dyn IssueRepository>,
}

impl IssueManager {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        epics: Arc<dyn EpicRepository>,
        issues: Arc<dyn IssueRepository>,
    ) -> Self {
        Self {
            projects,
            epics,
            issues,
        }
    }

    /// Issues that belong to another project are treated as missing.
    async fn require_issue(&self, project: &Project, public_id: Uuid) -> ManagerResult<Issue> {
        match self.issues.get_issue(public_id).await? {
            Some(issue) if issue.project_id == project.id => Ok(issue),
            _ => Err(ManagerError::NotFound(EntityKind::Issue)),
        }
    }

    /// Resolve a caller-supplied epic ID inside the project, `None` when it does not resolve
    async fn resolve_epic(&self, project: &Project, epic_id: &str) -> ManagerResult<Option<Epic>> {
        let Ok(public_id) = Uuid::parse_str(epic_id.trim()) else {
            return Ok(None);
        };

        Ok(self
            .epics
            .get_epic(public_id)
            .await?
            .filter(|epic| epic.project_id == project.id))
    }

    /// Run every field rule and report all failures together
    async fn validate(
        &self,
        project: &Project,
        fields: &IssueFields<'_>,
    ) -> ManagerResult<ValidatedIssue> {
        let mut errors = Vec::new();

        let epic = match fields.epic_id.filter(|id| !id.trim().is_empty()) {
            Some(epic_id) => {
                let epic = self.resolve_epic(project, epic_id).await?;
                if epic.is_none() {
                    errors.push(ValidationError::new("epicId", INVALID_EPIC_ID));
                }
                epic
            }
            None => None,
        };

        let issue_type = IssueType::parse_input(fields.issue_type);
        if issue_type.is_none() {
            errors.push(ValidationError::new("issueType", INVALID_ISSUE_TYPE));
        }

        validate_name(fields.name, &mut errors);
        validate_description(fields.description, &mut errors);

        let status = Status::parse_input(fields.status);
        if status.is_none() {
            errors.push(ValidationError::new("status", INVALID_STATUS));
        }

        match (issue_type, status) {
            (Some(issue_type), Some(status)) if errors.is_empty() => Ok(ValidatedIssue {
                epic,
                issue_type,
                name: fields.name.unwrap_or_default().to_string(),
                description: fields.description.map(str::to_string),
                status,
                estimate: fields.estimate,
            }),
            _ => Err(ManagerError::Validation(errors)),
        }
    }

    pub async fn create_issue(
        &self,
        project_id: Uuid,
        fields: IssueFields<'_>,
    ) -> ManagerResult<IssueView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let valid = self.validate(&project, &fields).await?;

        let issue = self
            .issues
            .create_issue(IssueCreateInput {
                project_id: project.id,
                epic_id: valid.epic.as_ref().map(|e| e.id),
                issue_type: valid.issue_type,
                name: valid.name,
                description: valid.description,
                status: valid.status,
                estimate: valid.estimate,
            })
            .await?;

        info!(
            "Created {} '{}' with ID {} in project {}",
            issue.issue_type, issue.name, issue.public_id, project.public_id
        );
        Ok(IssueView {
            issue,
            project,
            epic: valid.epic,
        })
    }

    pub async fn list_issues(&self, project_id: Uuid) -> ManagerResult<Vec<IssueView>> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let issues = self.issues.list_issues(project.id).await?;

        Ok(issues
            .into_iter()
            .map(|issue| IssueView {
                issue,
                project: project.clone(),
                epic: None,
            })
            .collect())
    }

    pub async fn get_issue(&self, project_id: Uuid, issue_id: Uuid) -> ManagerResult<IssueView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let issue = self.require_issue(&project, issue_id).await?;

        let epic = match issue.epic_id {
            Some(epic_id) => self.epics.get_epic_by_id(epic_id).await?,
            None => None,
        };

        Ok(IssueView {
            issue,
            project,
            epic,
        })
    }

    pub async fn update_issue(
        &self,
        project_id: Uuid,
        issue_id: Uuid,
        fields: IssueFields<'_>,
    ) -> ManagerResult<IssueView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        self.require_issue(&project, issue_id).await?;
        let valid = self.validate(&project, &fields).await?;

        let issue = self
            .issues
            .update_issue(
                issue_id,
                IssueUpdateInput {
                    epic_id: valid.epic.as_ref().map(|e| e.id),
                    issue_type: valid.issue_type,
                    name: valid.name,
                    description: valid.description,
                    status: valid.status,
                    estimate: valid.estimate,
                },
            )
            .await?;

        info!("Updated issue '{}' (ID: {})", issue.name, issue.public_id);
        Ok(IssueView {
            issue,
            project,
            epic: valid.epic,
        })
    }

    /// Any status may follow any other.
    pub async fn update_issue_status(
        &self,
        project_id: Uuid,
        issue_id: Uuid,
        status: Option<&str>,
    ) -> ManagerResult<IssueView> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        self.require_issue(&project, issue_id).await?;

        let status = Status::parse_input(status).ok_or_else(|| {
            ManagerError::Validation(vec![ValidationError::new("status", INVALID_STATUS)])
        })?;

        let issue = self.issues.update_issue_status(issue_id, status).await?;

        info!("Moved issue {} to {}", issue.public_id, issue.status);
        Ok(IssueView {
            issue,
            project,
            epic: None,
        })
    }

    pub async fn delete_issue(&self, project_id: Uuid, issue_id: Uuid) -> ManagerResult<()> {
        let project = require_project(self.projects.as_ref(), project_id).await?;
        let issue = self.require_issue(&project, issue_id).await?;
        self.issues.delete_issue(issue_id).await?;

        info!("Deleted issue '{}' (ID: {})", issue.name, issue.public_id);
        Ok(())
    }
}
