use axum::{routing::get, Router};
use spriint_projects::DbState;

pub mod health;

/// Full application router: the projects API plus the health probe
pub fn create_router(state: DbState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(spriint_projects::api::create_router(state))
}
