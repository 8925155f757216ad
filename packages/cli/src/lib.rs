// ABOUTME: Server assembly for the spriint binary
// ABOUTME: Builds the layered router and serves it until shutdown is signalled

use axum::http::{header, Method};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, CorsOrigin};
pub use error::{CliError, CliResult};

use spriint_projects::DbState;

pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    match origin {
        CorsOrigin::Any => cors.allow_origin(Any),
        CorsOrigin::Exact(value) => cors.allow_origin(value.clone()),
    }
}

/// Router with CORS and request tracing applied
pub fn build_app(state: DbState, config: &Config) -> Router {
    api::create_router(state)
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
}

/// Open the database, bind the listener, and serve until Ctrl-C
pub async fn run_server(config: Config) -> CliResult<()> {
    let state = DbState::init(&config.storage_config()).await?;
    let app = build_app(state.clone(), &config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully");
}
