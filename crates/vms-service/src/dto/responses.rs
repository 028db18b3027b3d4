//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic success acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Public user response (for search results and member listings)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// User search results
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

// ============================================================================
// Work Log Responses
// ============================================================================

/// Work log response
#[derive(Debug, Clone, Serialize)]
pub struct WorkLogResponse {
    pub id: String,
    pub volunteer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Work log listing
#[derive(Debug, Serialize)]
pub struct WorkLogListResponse {
    pub work_logs: Vec<WorkLogResponse>,
}

/// Outcome of a single item in a batch decision
#[derive(Debug, Serialize)]
pub struct BatchItemResult {
    pub id: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch decision response with per-item results
#[derive(Debug, Serialize)]
pub struct BatchApproveResponse {
    pub results: Vec<BatchItemResult>,
    pub approved_count: usize,
}

// ============================================================================
// Project Responses
// ============================================================================

/// Project response
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub is_team_project: bool,
    pub created_by: String,
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project listing
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
}

/// Progress note response
#[derive(Debug, Clone, Serialize)]
pub struct ProjectUpdateResponse {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Progress note listing
#[derive(Debug, Serialize)]
pub struct ProjectUpdateListResponse {
    pub updates: Vec<ProjectUpdateResponse>,
}

// ============================================================================
// Team Responses
// ============================================================================

/// Team response
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Team listing
#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
}

/// Team member with profile fields
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Member listing
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

/// Team dashboard statistics
#[derive(Debug, Serialize)]
pub struct TeamStatsResponse {
    pub total_hours: f64,
    pub pending_count: i64,
    pub project_count: i64,
    pub active_project_count: i64,
    pub member_count: i64,
}

/// Per-member approved hours, sorted descending
#[derive(Debug, Clone, Serialize)]
pub struct MemberHoursResponse {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub total_hours: f64,
}

/// Member hours listing
#[derive(Debug, Serialize)]
pub struct MemberHoursListResponse {
    pub member_hours: Vec<MemberHoursResponse>,
}

// ============================================================================
// Document Responses
// ============================================================================

/// Document response
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub uploader_id: String,
    pub title: String,
    pub drive_link: String,
    pub doc_type: String,
    pub is_global: bool,
    pub team_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Document listing
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
