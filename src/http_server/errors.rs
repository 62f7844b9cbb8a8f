//! Error responses
//!
//! Maps `DocumentError` onto status codes and a `{ message, code }` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::document::DocumentError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

/// Error returned by route handlers
#[derive(Debug)]
pub struct ApiError(pub DocumentError);

impl From<DocumentError> for ApiError {
    fn from(e: DocumentError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.status_code();
        if self.0.is_internal() {
            error!(error = %self.0, "request failed");
        }

        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            message: self.0.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}
