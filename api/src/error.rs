//! Unified error types for the feed API
//!
//! This module defines error types for each layer:
//! - `FetchError`: Upstream provider errors (posts, billboards)
//! - `ConfigError`: Startup configuration and page-state errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)
//!
//! Feed assembly itself has no error type. Absent billboards, a missing
//! podcast block or no pinned/image candidate are ordinary states.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Upstream provider errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Configuration errors, raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Failed to read page state {path}: {source}")]
    PageStateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed page state: {0}")]
    PageState(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Fetch(e) => {
                tracing::error!("Upstream error: {}", e);
                match e {
                    FetchError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "Rate limited", None)
                    }
                    FetchError::Api { message, .. } => {
                        (StatusCode::BAD_GATEWAY, "Upstream error", Some(message.clone()))
                    }
                    _ => (StatusCode::BAD_GATEWAY, "Upstream error", None),
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
