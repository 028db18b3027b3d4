//! sqlx-to-domain error translation shared by all repositories.

use sqlx::Error as SqlxError;
use vms_core::error::DomainError;
use vms_core::value_objects::Snowflake;

pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Turn a unique-constraint violation into the caller's conflict error;
/// anything else stays a database error.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn work_log_not_found(id: Snowflake) -> DomainError {
    DomainError::WorkLogNotFound(id)
}

pub fn project_not_found(id: Snowflake) -> DomainError {
    DomainError::ProjectNotFound(id)
}

pub fn team_not_found(id: Snowflake) -> DomainError {
    DomainError::TeamNotFound(id)
}

pub fn document_not_found(id: Snowflake) -> DomainError {
    DomainError::DocumentNotFound(id)
}

pub fn member_not_found() -> DomainError {
    DomainError::MemberNotFound
}
