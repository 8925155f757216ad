// ABOUTME: Request and response bodies for the projects API
// ABOUTME: Outputs expose public IDs only and serialize enums by name

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spriint_core::{EpicView, IssueType, IssueView, Project, ProjectCounts, Status};
use uuid::Uuid;

use crate::manager::IssueFields;

/// Body for creating or updating a project or an epic
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NamedEntityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body for creating or fully updating an issue
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRequest {
    pub epic_id: Option<String>,
    pub issue_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub estimate: Option<i32>,
}

impl IssueRequest {
    pub fn fields(&self) -> IssueFields<'_> {
        IssueFields {
            epic_id: self.epic_id.as_deref(),
            issue_type: self.issue_type.as_deref(),
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            status: self.status.as_deref(),
            estimate: self.estimate,
        }
    }
}

/// Body for the status patch: a bare JSON string or `{"status": "..."}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusPatchRequest {
    Bare(Option<String>),
    Wrapped { status: Option<String> },
}

impl StatusPatchRequest {
    pub fn status(&self) -> Option<&str> {
        match self {
            StatusPatchRequest::Bare(status) | StatusPatchRequest::Wrapped { status } => {
                status.as_deref()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date_time_created: DateTime<Utc>,
}

impl From<Project> for ProjectOutput {
    fn from(project: Project) -> Self {
        Self {
            project_id: project.public_id,
            name: project.name,
            description: project.description,
            date_time_created: project.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCountsOutput {
    pub project_id: Uuid,
    pub epic_count: i64,
    pub story_count: i64,
    pub bug_count: i64,
}

impl ProjectCountsOutput {
    pub fn new(project_id: Uuid, counts: ProjectCounts) -> Self {
        Self {
            project_id,
            epic_count: counts.epic_count,
            story_count: counts.story_count,
            bug_count: counts.bug_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EpicOutput {
    pub epic_id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub date_time_created: DateTime<Utc>,
}

impl From<EpicView> for EpicOutput {
    fn from(view: EpicView) -> Self {
        Self {
            epic_id: view.epic.public_id,
            project_id: view.project.public_id,
            name: view.epic.name,
            description: view.epic.description,
            status: view.epic.status,
            date_time_created: view.epic.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueOutput {
    pub issue_id: Uuid,
    pub project_id: Uuid,
    pub epic_id: Option<Uuid>,
    pub issue_type: IssueType,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub estimate: Option<i32>,
    pub date_time_created: DateTime<Utc>,
}

impl From<IssueView> for IssueOutput {
    fn from(view: IssueView) -> Self {
        let IssueView { issue, project, epic } = view;
        Self {
            issue_id: issue.public_id,
            project_id: project.public_id,
            epic_id: epic.map(|e| e.public_id).or(issue.epic_public_id),
            issue_type: issue.issue_type,
            name: issue.name,
            description: issue.description,
            status: issue.status,
            estimate: issue.estimate,
            date_time_created: issue.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_patch_accepts_bare_string() {
        let patch: StatusPatchRequest = serde_json::from_str("\"InTest\"").unwrap();
        assert_eq!(patch.status(), Some("InTest"));
    }

    #[test]
    fn test_status_patch_accepts_object() {
        let patch: StatusPatchRequest = serde_json::from_str(r#"{"status":"Complete"}"#).unwrap();
        assert_eq!(patch.status(), Some("Complete"));
    }

    #[test]
    fn test_status_patch_null_is_absent() {
        let patch: StatusPatchRequest = serde_json::from_str("null").unwrap();
        assert_eq!(patch.status(), None);
    }

    #[test]
    fn test_issue_request_reads_camel_case() {
        let request: IssueRequest = serde_json::from_str(
            r#"{"epicId":"abc","issueType":"Bug","name":"n","status":"ToDo","estimate":2}"#,
        )
        .unwrap();
        let fields = request.fields();
        assert_eq!(fields.epic_id, Some("abc"));
        assert_eq!(fields.issue_type, Some("Bug"));
        assert_eq!(fields.estimate, Some(2));
        assert_eq!(fields.description, None);
    }
}
