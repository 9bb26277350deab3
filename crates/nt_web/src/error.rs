use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use nt_core::Error;
use serde::Serialize;

pub const UNEXPECTED: &str = "An unexpected error occurred.";
pub const UNEXPECTED_WHILE_GROUPING: &str =
    "An unexpected error occurred while grouping news articles.";
pub const UNEXPECTED_WHILE_SETTING_MODE: &str =
    "An unexpected error occurred while setting the mode.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// A pipeline error bound to the request path it failed on.
#[derive(Debug)]
pub struct ApiError {
    pub error: Error,
    pub path: String,
    /// Shown instead of internal detail when the error maps to a 500.
    pub unexpected: &'static str,
}

impl ApiError {
    pub fn new(error: Error, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
            unexpected: UNEXPECTED,
        }
    }

    pub fn with_unexpected(mut self, message: &'static str) -> Self {
        self.unexpected = message;
        self
    }

    fn body(&self, status: StatusCode, error: &str, message: String) -> Response {
        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
            path: self.path.clone(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            Error::NoContent(message) => {
                tracing::info!("No content on {}: {}", self.path, message);
                StatusCode::NO_CONTENT.into_response()
            }
            client if client.is_client_error() => {
                tracing::error!("Rejected input on {}: {}", self.path, client);
                let title = match client {
                    Error::InvalidKeyword(_) => "Invalid Keyword",
                    _ => "Invalid Input",
                };
                self.body(StatusCode::BAD_REQUEST, title, client.to_string())
            }
            other => {
                tracing::error!("Unexpected error on {}: {}", self.path, other);
                self.body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    self.unexpected.to_string(),
                )
            }
        }
    }
}
