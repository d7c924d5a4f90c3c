//! Mapping from core errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use gradebook_core::CoreError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Wraps a [`CoreError`] so handlers can use `?` and still produce the
/// `{"error": message}` body with the right status code.
#[derive(Debug)]
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CoreError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            CoreError::DuplicateId(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            CoreError::StudentNotFound(_) => {
                (StatusCode::NOT_FOUND, "Student not found".to_string())
            }
            CoreError::SubjectNotFound(_) => {
                (StatusCode::NOT_FOUND, "Subject not found".to_string())
            }
            CoreError::Store(err) => {
                tracing::error!("store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
