use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Unique error codes for client identification
#[derive(Debug, Clone, Copy)]
pub enum ErrorCode {
    // Database errors (1xxx)
    DatabaseQuery = 1002,

    // Validation errors (2xxx)
    ValidationFailed = 2001,

    // External service errors (5xxx)
    UpstreamTransport = 5001,
    ListingParse = 5002,

    // Internal errors (9xxx)
    InternalError = 9001,
    ConfigurationError = 9002,
}

impl ErrorCode {
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] sea_orm::DbErr),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Network or HTTP failure calling an external source. In the query path
    /// these are caught at the call site and degraded to empty results; only
    /// the ingestion path lets them reach a logger as errors.
    #[error("Upstream request failed: {0}")]
    TransportError(String),

    #[error("Listing markup parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportError(err.to_string())
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::DatabaseQueryError(_) => ErrorCode::DatabaseQuery,
            Self::ValidationError(_) => ErrorCode::ValidationFailed,
            Self::TransportError(_) => ErrorCode::UpstreamTransport,
            Self::ParseError(_) => ErrorCode::ListingParse,
            Self::ConfigError(_) => ErrorCode::ConfigurationError,
            Self::InternalError(_) => ErrorCode::InternalError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DatabaseQueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::TransportError(_) => StatusCode::BAD_GATEWAY,
            Self::ParseError(_) => StatusCode::BAD_GATEWAY,
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        match &self {
            AppError::ValidationError(_) => {
                tracing::debug!(error_code = error_code.as_u16(), %message, "Client error");
            }
            _ => {
                tracing::error!(error_code = error_code.as_u16(), %message, error = ?self, "Server error");
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code.as_u16(),
                "status": status.as_u16(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
