//! HTTP error handling and response conversion.
//!
//! This module provides structured error types that are mapped to appropriate HTTP status codes
//! and JSON responses of the form `{"error": "<message>"}`.
//!
//! Classification failures only reach this module when soft errors are disabled; in the
//! default mode the predict handler reports them inside a `200` payload instead.

use crate::domain::toxicity::errors::ClassificationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be parsed (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Classification pipeline failed (422 for input problems, 500 otherwise).
    Classification(ClassificationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Classification(err) => write!(f, "Classification error ({}): {}", err.kind(), err),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Classification(err) if err.is_input_related() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message.
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::Classification(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Log the error with full context
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let body = match &self {
            Self::Classification(err) => json!({ "error": message, "kind": err.kind() }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        AppError::Classification(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::ValidationError(message)
    }
}
