//! HTTP mapping for [`Error`].
//!
//! Expected failures carry a plain-text message; anything else becomes a 500
//! with a `{message, details}` JSON body and is logged.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Ai { message } => {
                (StatusCode::BAD_REQUEST, format!("Error: {message}")).into_response()
            }
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Conflict { message } => (StatusCode::CONFLICT, message).into_response(),
            other => {
                error!(error = %other, "Request failed");
                let body = Json(json!({
                    "message": "An unexpected error occurred.",
                    "details": other.to_string(),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
