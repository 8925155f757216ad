// ABOUTME: JSON body extractor that reports malformed bodies in the API envelope
// ABOUTME: Replaces axum's plain-text 422 rejection with a 400 ApiResponse

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::response::ApiResponse;

/// Request body parsed as JSON
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

fn reject(rejection: JsonRejection) -> Response {
    debug!("Rejected request body: {}", rejection.body_text());

    let status = match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    let message = format!("The request body was not valid. {}", rejection.body_text());

    (status, ResponseJson(ApiResponse::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::IssueRequest;
    use axum::body::Body;
    use axum::http::header;
    use http_body_util::BodyExt;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn rejection_of(request: Request) -> (StatusCode, serde_json::Value) {
        let response = ApiJson::<IssueRequest>::from_request(request, &())
            .await
            .unwrap_err();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_well_formed_body() {
        let ApiJson(request) = ApiJson::<IssueRequest>::from_request(
            json_request(r#"{"issueType":"Bug","estimate":2}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(request.issue_type.as_deref(), Some("Bug"));
        assert_eq!(request.estimate, Some(2));
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request_envelope() {
        let (status, body) = rejection_of(json_request(r#"{"estimate":"x"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("The request body was not valid."));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = rejection_of(json_request("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_missing_content_type_keeps_media_type_status() {
        let request = Request::builder()
            .body(Body::from(r#"{"name":"x"}"#))
            .unwrap();

        let (status, body) = rejection_of(request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["success"], false);
    }
}
