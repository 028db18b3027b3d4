//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where input needs checking,
//! `Validate`. Snowflake IDs arrive as strings and deserialize through the
//! `Snowflake` serde impl.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;
use vms_core::Snowflake;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Work Log Requests
// ============================================================================

/// Report volunteer hours. The team is derived from the volunteer's
/// membership, never supplied by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkLogRequest {
    pub date: NaiveDate,

    #[serde(alias = "hours")]
    pub hours_worked: f64,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,
}

/// Edit a pending work log
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWorkLogRequest {
    pub date: Option<NaiveDate>,

    #[serde(alias = "hours")]
    pub hours_worked: Option<f64>,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: Option<String>,
}

/// Approve or reject a single work log
#[derive(Debug, Clone, Deserialize)]
pub struct DecideWorkLogRequest {
    /// "approved" or "rejected"
    pub status: String,
}

/// Decide a batch of work logs for one team
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchApproveRequest {
    #[validate(length(min = 1, message = "At least one work log id is required"))]
    pub log_ids: Vec<Snowflake>,

    /// "approved" or "rejected"
    pub status: String,
}

// ============================================================================
// Project Requests
// ============================================================================

/// Create a draft project. Personal projects carry no team; team
/// projects name one and require membership.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_team_project: bool,

    #[serde(default)]
    pub team_id: Option<Snowflake>,
}

/// Edit a draft project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
}

/// Admin review of a submitted project
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDecisionRequest {
    /// "approve" or "reject"
    pub action: String,
}

/// Post a progress note to an approved or in-progress project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectUpdateRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,
}

// ============================================================================
// Team Requests
// ============================================================================

/// Create a team
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update a team's name or description
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Add a member to a team (also used to name one for removal)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddMemberRequest {
    pub user_id: Snowflake,
}

// ============================================================================
// Document Requests
// ============================================================================

/// Upload a document link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadDocumentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(url(message = "Drive link must be a valid URL"))]
    pub drive_link: String,

    /// "submission", "signed", "proposal", or "update"
    pub doc_type: String,

    /// Admin-only: visible to everyone
    #[serde(default)]
    pub is_global: bool,

    /// Admin-only: teams to share with
    #[serde(default)]
    pub team_ids: Vec<Snowflake>,
}
