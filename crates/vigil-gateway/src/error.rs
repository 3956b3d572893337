//! Error types for the Vigil gateway

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vigil_vision::VisionError;

/// Gateway startup and lifecycle errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for GatewayError {
    fn from(err: config::ConfigError) -> Self {
        GatewayError::Config(err.to_string())
    }
}

/// Anything that can go wrong while serving one request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Multipart form has no file part with the expected name
    #[error("missing file field '{0}'")]
    MissingFile(String),

    /// Request is not a multipart form
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// Multipart stream could not be read
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// JSON body missing or malformed
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Vision model call failed
    #[error(transparent)]
    Model(#[from] VisionError),
}

impl ApiError {
    /// Attach the handler's fixed failure message.
    pub fn reported_as(self, error: &'static str) -> Failure {
        Failure {
            error,
            details: self.to_string(),
        }
    }
}

/// Error body returned by every handler.
///
/// Existing clients read the `error` key instead of the status code, so the
/// response is always `200 OK`.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub error: &'static str,
    pub details: String,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        tracing::warn!(error = self.error, details = %self.details, "request failed");
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Result type alias for handler bodies
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
