// ABOUTME: HTTP request handlers for issue operations
// ABOUTME: Routes are nested under /api/projects/{project_id}/issues

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::{error, info};
use uuid::Uuid;

use super::extract::ApiJson;
use super::models::{IssueOutput, IssueRequest, StatusPatchRequest};
use super::response::ApiResponse;
use crate::db::DbState;

/// List all issues in a project
pub async fn list_issues(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("Listing issues for project: {}", project_id);

    match db.issue_manager.list_issues(project_id).await {
        Ok(issues) => {
            let output: Vec<IssueOutput> = issues.into_iter().map(Into::into).collect();
            (StatusCode::OK, ResponseJson(ApiResponse::success(output))).into_response()
        }
        Err(e) => {
            error!("Failed to list issues for project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

pub async fn create_issue(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
    ApiJson(request): ApiJson<IssueRequest>,
) -> impl IntoResponse {
    info!("Creating issue in project: {}", project_id);

    match db
        .issue_manager
        .create_issue(project_id, request.fields())
        .await
    {
        Ok(view) => {
            let location = format!(
                "/api/projects/{}/issues/{}",
                project_id, view.issue.public_id
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                ResponseJson(ApiResponse::success(IssueOutput::from(view))),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create issue in project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

pub async fn get_issue(
    State(db): State<DbState>,
    Path((project_id, issue_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    info!("Getting issue: {}", issue_id);

    match db.issue_manager.get_issue(project_id, issue_id).await {
        Ok(view) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(IssueOutput::from(view))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to get issue {}: {}", issue_id, e);
            e.into_response()
        }
    }
}

pub async fn update_issue(
    State(db): State<DbState>,
    Path((project_id, issue_id)): Path<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<IssueRequest>,
) -> impl IntoResponse {
    info!("Updating issue: {}", issue_id);

    match db
        .issue_manager
        .update_issue(project_id, issue_id, request.fields())
        .await
    {
        Ok(view) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(IssueOutput::from(view))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update issue {}: {}", issue_id, e);
            e.into_response()
        }
    }
}

/// Change only the status of an issue
pub async fn update_issue_status(
    State(db): State<DbState>,
    Path((project_id, issue_id)): Path<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<StatusPatchRequest>,
) -> impl IntoResponse {
    info!("Updating status of issue {} to {:?}", issue_id, request.status());

    match db
        .issue_manager
        .update_issue_status(project_id, issue_id, request.status())
        .await
    {
        Ok(view) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(IssueOutput::from(view))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update status of issue {}: {}", issue_id, e);
            e.into_response()
        }
    }
}

pub async fn delete_issue(
    State(db): State<DbState>,
    Path((project_id, issue_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    info!("Deleting issue: {}", issue_id);

    match db.issue_manager.delete_issue(project_id, issue_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete issue {}: {}", issue_id, e);
            e.into_response()
        }
    }
}
