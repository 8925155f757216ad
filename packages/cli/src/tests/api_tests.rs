use crate::config::{Config, CorsOrigin};
use crate::{build_app, run_server};
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use spriint_projects::DbState;
use std::path::PathBuf;
use tower::ServiceExt;

fn test_config(cors_origin: CorsOrigin) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 4001,
        cors_origin,
        database_path: PathBuf::from("unused.db"),
        max_connections: 1,
    }
}

async fn test_app(cors_origin: CorsOrigin) -> axum::Router {
    let state = DbState::in_memory().await.unwrap();
    build_app(state, &test_config(cors_origin))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(CorsOrigin::Any).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_projects_list_endpoint() {
    let app = test_app(CorsOrigin::Any).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/projects")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let app = test_app(CorsOrigin::Any).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = test_app(CorsOrigin::Any).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::ORIGIN, "http://somewhere.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        HeaderValue::from_static("*")
    );
}

#[tokio::test]
async fn test_cors_preflight_with_exact_origin() {
    let origin = HeaderValue::from_static("http://localhost:5173");
    let app = test_app(CorsOrigin::Exact(origin.clone())).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"));
}

#[tokio::test]
async fn test_run_server_reports_unusable_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"file").unwrap();

    let mut config = test_config(CorsOrigin::Any);
    config.database_path = blocker.join("spriint.db");

    let result = run_server(config).await;

    assert!(matches!(result, Err(crate::CliError::Storage(_))));
}
