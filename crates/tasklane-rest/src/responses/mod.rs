//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tasklane_core::{ErrorResponse, TasklaneError};
use tracing::{error, warn};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(error: ErrorResponse) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub TasklaneError);

impl From<TasklaneError> for AppError {
    fn from(err: TasklaneError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_client_error() {
            warn!("Request rejected: {}", self.0);
        } else {
            error!("Request failed: {}", self.0);
        }

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let err = TasklaneError::not_found("Project", "abc");
        let response = ApiResponse::<()>::error(ErrorResponse::from_error(&err));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_app_error_status_mapping() {
        let cases = [
            (TasklaneError::not_found("Task", "x"), 404),
            (TasklaneError::conflict("duplicate"), 409),
            (TasklaneError::InvalidCredentials, 401),
            (TasklaneError::TokenExpired, 401),
            (TasklaneError::validation("bad input"), 400),
            (TasklaneError::business_rule("no"), 400),
            (TasklaneError::internal("boom"), 500),
        ];

        for (err, expected) in cases {
            let response = AppError(err).into_response();
            assert_eq!(response.status().as_u16(), expected);
        }
    }
}
