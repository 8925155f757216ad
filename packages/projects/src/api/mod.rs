use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::db::DbState;

pub mod epics_handlers;
pub mod extract;
pub mod handlers;
pub mod issues_handlers;
pub mod models;
pub mod response;

/// Creates the full API router with state attached
pub fn create_router(state: DbState) -> Router {
    Router::new()
        .nest("/api/projects", create_projects_router())
        .with_state(state)
}

/// Creates the projects API router (nested under /api/projects)
pub fn create_projects_router() -> Router<DbState> {
    Router::new()
        .route("/", get(handlers::list_projects))
        .route("/", post(handlers::create_project))
        .route("/{project_id}", get(handlers::get_project))
        .route("/{project_id}", put(handlers::update_project))
        .route("/{project_id}", delete(handlers::delete_project))
        .route("/{project_id}/counts", get(handlers::get_project_counts))
        .nest("/{project_id}/epics", create_epics_router())
        .nest("/{project_id}/issues", create_issues_router())
}

/// Creates the epics API router (nested under /api/projects/{project_id}/epics)
pub fn create_epics_router() -> Router<DbState> {
    Router::new()
        .route("/", get(epics_handlers::list_epics))
        .route("/", post(epics_handlers::create_epic))
        .route("/{epic_id}", get(epics_handlers::get_epic))
        .route("/{epic_id}", put(epics_handlers::update_epic))
        .route("/{epic_id}", delete(epics_handlers::delete_epic))
}

/// Creates the issues API router (nested under /api/projects/{project_id}/issues)
pub fn create_issues_router() -> Router<DbState> {
    Router::new()
        .route("/", get(issues_handlers::list_issues))
        .route("/", post(issues_handlers::create_issue))
        .route("/{issue_id}", get(issues_handlers::get_issue))
        .route("/{issue_id}", put(issues_handlers::update_issue))
        .route("/{issue_id}", patch(issues_handlers::update_issue_status))
        .route("/{issue_id}", delete(issues_handlers::delete_issue))
}
