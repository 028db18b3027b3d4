//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Work log not found: {0}")]
    WorkLogNotFound(Snowflake),

    #[error("Project not found: {0}")]
    ProjectNotFound(Snowflake),

    #[error("Team not found: {0}")]
    TeamNotFound(Snowflake),

    #[error("Document not found: {0}")]
    DocumentNotFound(Snowflake),

    #[error("Member not found in team")]
    MemberNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid hours: {0} (must be greater than 0 and at most 24)")]
    InvalidHours(f64),

    #[error("Link must point to Google Drive or Google Docs")]
    InvalidDriveLink,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Admin access required")]
    AdminOnly,

    #[error("Only volunteers can perform this action")]
    VolunteerOnly,

    #[error("Not a member of this team")]
    NotTeamMember,

    #[error("Team leader access required")]
    NotTeamLeader,

    #[error("Not the owner of this resource")]
    NotResourceOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Team name already taken")]
    TeamNameExists,

    #[error("Already a member of this team")]
    AlreadyMember,

    #[error("Work log {0} has already been reviewed")]
    WorkLogAlreadyDecided(Snowflake),

    #[error("Cannot {action} a project in status {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot remove the team leader")]
    CannotRemoveLeader,

    #[error("Cannot delete a team that has projects")]
    TeamHasProjects,

    #[error("Only draft projects can be edited or deleted")]
    ProjectNotEditable,

    #[error("Only pending work logs can be edited or deleted")]
    WorkLogNotEditable,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::WorkLogNotFound(_) => "UNKNOWN_WORK_LOG",
            Self::ProjectNotFound(_) => "UNKNOWN_PROJECT",
            Self::TeamNotFound(_) => "UNKNOWN_TEAM",
            Self::DocumentNotFound(_) => "UNKNOWN_DOCUMENT",
            Self::MemberNotFound => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidHours(_) => "INVALID_HOURS",
            Self::InvalidDriveLink => "INVALID_DRIVE_LINK",

            // Authorization
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::VolunteerOnly => "VOLUNTEER_ONLY",
            Self::NotTeamMember => "NOT_TEAM_MEMBER",
            Self::NotTeamLeader => "NOT_TEAM_LEADER",
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::TeamNameExists => "TEAM_NAME_EXISTS",
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::WorkLogAlreadyDecided(_) => "WORK_LOG_ALREADY_DECIDED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",

            // Business Rules
            Self::CannotRemoveLeader => "CANNOT_REMOVE_LEADER",
            Self::TeamHasProjects => "TEAM_HAS_PROJECTS",
            Self::ProjectNotEditable => "PROJECT_NOT_EDITABLE",
            Self::WorkLogNotEditable => "WORK_LOG_NOT_EDITABLE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::WorkLogNotFound(_)
                | Self::ProjectNotFound(_)
                | Self::TeamNotFound(_)
                | Self::DocumentNotFound(_)
                | Self::MemberNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::InvalidHours(_)
                | Self::InvalidDriveLink
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_)
                | Self::AdminOnly
                | Self::VolunteerOnly
                | Self::NotTeamMember
                | Self::NotTeamLeader
                | Self::NotResourceOwner
        )
    }

    /// Check if this is a conflict error (state machine or uniqueness)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::TeamNameExists
                | Self::AlreadyMember
                | Self::WorkLogAlreadyDecided(_)
                | Self::InvalidTransition { .. }
                | Self::CannotRemoveLeader
                | Self::TeamHasProjects
                | Self::ProjectNotEditable
                | Self::WorkLogNotEditable
        )
    }
}
