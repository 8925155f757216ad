// ABOUTME: HTTP request handlers for project operations
// ABOUTME: Maps path IDs and JSON bodies onto ProjectManager calls

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::{error, info};
use uuid::Uuid;

use super::extract::ApiJson;
use super::models::{NamedEntityRequest, ProjectCountsOutput, ProjectOutput};
use super::response::ApiResponse;
use crate::db::DbState;

/// List all projects
pub async fn list_projects(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing all projects");

    match db.project_manager.list_projects().await {
        Ok(projects) => {
            info!("Retrieved {} projects", projects.len());
            let output: Vec<ProjectOutput> = projects.into_iter().map(Into::into).collect();
            (StatusCode::OK, ResponseJson(ApiResponse::success(output))).into_response()
        }
        Err(e) => {
            error!("Failed to list projects: {}", e);
            e.into_response()
        }
    }
}

/// Create a new project
pub async fn create_project(
    State(db): State<DbState>,
    ApiJson(request): ApiJson<NamedEntityRequest>,
) -> impl IntoResponse {
    info!("Creating project: {:?}", request.name);

    match db
        .project_manager
        .create_project(request.name.as_deref(), request.description.as_deref())
        .await
    {
        Ok(project) => {
            let location = format!("/api/projects/{}", project.public_id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                ResponseJson(ApiResponse::success(ProjectOutput::from(project))),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create project: {}", e);
            e.into_response()
        }
    }
}

/// Get a specific project by ID
pub async fn get_project(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("Getting project with ID: {}", project_id);

    match db.project_manager.get_project(project_id).await {
        Ok(project) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(ProjectOutput::from(project))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to get project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

/// Get epic, story, and bug counts for a project
pub async fn get_project_counts(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("Getting counts for project: {}", project_id);

    match db.project_manager.get_project_counts(project_id).await {
        Ok(counts) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(ProjectCountsOutput::new(
                project_id, counts,
            ))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to count project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

/// Update an existing project
pub async fn update_project(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
    ApiJson(request): ApiJson<NamedEntityRequest>,
) -> impl IntoResponse {
    info!("Updating project: {}", project_id);

    match db
        .project_manager
        .update_project(
            project_id,
            request.name.as_deref(),
            request.description.as_deref(),
        )
        .await
    {
        Ok(project) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(ProjectOutput::from(project))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

/// Delete a project along with its epics and issues
pub async fn delete_project(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("Deleting project: {}", project_id);

    match db.project_manager.delete_project(project_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete project {}: {}", project_id, e);
            e.into_response()
        }
    }
}
