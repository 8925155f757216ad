// ABOUTME: Shared API response envelope and error-to-status mapping
// ABOUTME: Every endpoint answers with the same success/data/error shape

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use spriint_core::ValidationError;
use spriint_storage::StorageError;
use tracing::{debug, error};

use crate::manager::{EntityKind, ManagerError};

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(rename = "validationErrors", skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            validation_errors: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            validation_errors: None,
        }
    }

    pub fn invalid(message: String, errors: Vec<ValidationError>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            validation_errors: Some(errors),
        }
    }
}

/// Convert manager errors to HTTP responses
impl IntoResponse for ManagerError {
    fn into_response(self) -> Response {
        match self {
            ManagerError::NotFound(kind) => {
                debug!("Lookup failed for {}", kind);
                not_found(self.to_string())
            }
            ManagerError::Validation(ref errors) => {
                let errors = errors.clone();
                (
                    StatusCode::BAD_REQUEST,
                    ResponseJson(ApiResponse::invalid(self.to_string(), errors)),
                )
                    .into_response()
            }
            // Row vanished between the existence check and the write
            ManagerError::Storage(StorageError::NotFound) => {
                not_found(ManagerError::NotFound(EntityKind::Project).to_string())
            }
            ManagerError::Storage(e) => {
                error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ResponseJson(ApiResponse::error("Internal server error".to_string())),
                )
                    .into_response()
            }
        }
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, ResponseJson(ApiResponse::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ManagerError::NotFound(EntityKind::Issue), StatusCode::NOT_FOUND),
            (
                ManagerError::Validation(vec![ValidationError::new("name", "Must be set.")]),
                StatusCode::BAD_REQUEST,
            ),
            (
                ManagerError::Storage(StorageError::NotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                ManagerError::Storage(StorageError::InvalidData("Unknown status: 9".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_success_envelope_omits_validation_errors() {
        let json = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 1);
        assert!(json.get("validationErrors").is_none());
    }
}
