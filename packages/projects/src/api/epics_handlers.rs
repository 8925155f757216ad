// ABOUTME: HTTP request handlers for epic operations
// ABOUTME: Routes are nested under /api/projects/{project_id}/epics

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::{error, info};
use uuid::Uuid;

use super::extract::ApiJson;
use super::models::{EpicOutput, NamedEntityRequest};
use super::response::ApiResponse;
use crate::db::DbState;

/// List all epics in a project
pub async fn list_epics(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    info!("Listing epics for project: {}", project_id);

    match db.epic_manager.list_epics(project_id).await {
        Ok(epics) => {
            let output: Vec<EpicOutput> = epics.into_iter().map(Into::into).collect();
            (StatusCode::OK, ResponseJson(ApiResponse::success(output))).into_response()
        }
        Err(e) => {
            error!("Failed to list epics for project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

pub async fn create_epic(
    State(db): State<DbState>,
    Path(project_id): Path<Uuid>,
    ApiJson(request): ApiJson<NamedEntityRequest>,
) -> impl IntoResponse {
    info!("Creating epic in project: {}", project_id);

    match db
        .epic_manager
        .create_epic(
            project_id,
            request.name.as_deref(),
            request.description.as_deref(),
        )
        .await
    {
        Ok(view) => {
            let location = format!(
                "/api/projects/{}/epics/{}",
                project_id, view.epic.public_id
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                ResponseJson(ApiResponse::success(EpicOutput::from(view))),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create epic in project {}: {}", project_id, e);
            e.into_response()
        }
    }
}

pub async fn get_epic(
    State(db): State<DbState>,
    Path((project_id, epic_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    info!("Getting epic: {}", epic_id);

    match db.epic_manager.get_epic(project_id, epic_id).await {
        Ok(view) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(EpicOutput::from(view))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to get epic {}: {}", epic_id, e);
            e.into_response()
        }
    }
}

pub async fn update_epic(
    State(db): State<DbState>,
    Path((project_id, epic_id)): Path<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<NamedEntityRequest>,
) -> impl IntoResponse {
    info!("Updating epic: {}", epic_id);

    match db
        .epic_manager
        .update_epic(
            project_id,
            epic_id,
            request.name.as_deref(),
            request.description.as_deref(),
        )
        .await
    {
        Ok(view) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(EpicOutput::from(view))),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update epic {}: {}", epic_id, e);
            e.into_response()
        }
    }
}

/// Delete an epic; its issues stay in the project without an epic
pub async fn delete_epic(
    State(db): State<DbState>,
    Path((project_id, epic_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    info!("Deleting epic: {}", epic_id);

    match db.epic_manager.delete_epic(project_id, epic_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete epic {}: {}", epic_id, e);
            e.into_response()
        }
    }
}
