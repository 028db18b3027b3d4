//! Application-level error type shared across crates.
//!
//! Domain errors pass through transparently; infrastructure failures get
//! their own variants so callers can tell a bad request from a broken
//! dependency.

use serde::Serialize;
use vms_core::DomainError;

/// Errors surfaced by auth, config, and storage plumbing
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status and wire code for this error.
    fn classify(&self) -> (u16, &'static str) {
        match self {
            Self::InvalidCredentials => (401, "INVALID_CREDENTIALS"),
            Self::InvalidToken => (401, "INVALID_TOKEN"),
            Self::TokenExpired => (401, "TOKEN_EXPIRED"),
            Self::MissingAuth => (401, "MISSING_AUTH"),
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::NotFound(_) => (404, "NOT_FOUND"),
            Self::AlreadyExists(_) => (409, "ALREADY_EXISTS"),
            Self::Conflict(_) => (409, "CONFLICT"),
            Self::Database(_) => (500, "DATABASE_ERROR"),
            Self::Internal(_) => (500, "INTERNAL_ERROR"),
            Self::Config(_) => (500, "CONFIG_ERROR"),
            Self::Domain(e) => (domain_status(e), e.code()),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.classify().0
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }

    /// True for 5xx errors, the ones worth retrying or paging about.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_authorization() {
        403
    } else if e.is_validation() {
        400
    } else if e.is_conflict() {
        409
    } else {
        500
    }
}

/// Wire shape of an error, shared by all API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
