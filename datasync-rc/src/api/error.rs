//! API error mapping
//!
//! Wraps the common error taxonomy and renders it as a JSON response with
//! a stable `error` code and human-readable `message`. NotFound maps to
//! 404; the validation errors are user-correctable input errors and map to
//! 422.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use datasync_common::Error;

/// Handler-level error carrying the common taxonomy
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::CommentTooShort { .. }
            | Error::MissingSourceSelection
            | Error::EmptyEmailBody
            | Error::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Io(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.0.code(),
            "message": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
