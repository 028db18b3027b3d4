//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("volunteer{suffix}"),
            email: format!("volunteer{suffix}@example.com"),
            password: "TestPass123".to_string(),
            first_name: "Test".to_string(),
            last_name: format!("User{suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user profile
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Public user (search results, admin views)
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// User listing
#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Create team request
#[derive(Debug, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateTeamRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Team {suffix}"),
            description: Some("A test team".to_string()),
        }
    }
}

/// Team response
#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
}

/// Team listing
#[derive(Debug, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
}

/// Team member
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub username: String,
    pub role: String,
}

/// Member listing
#[derive(Debug, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

/// Add member request
#[derive(Debug, Serialize)]
pub struct AddMemberRequest {
    pub user_id: String,
}

/// Team stats
#[derive(Debug, Deserialize)]
pub struct TeamStatsResponse {
    pub total_hours: f64,
    pub pending_count: i64,
    pub project_count: i64,
    pub active_project_count: i64,
    pub member_count: i64,
}

/// Per-member hours
#[derive(Debug, Deserialize)]
pub struct MemberHoursResponse {
    pub user_id: String,
    pub username: String,
    pub total_hours: f64,
}

/// Member hours listing
#[derive(Debug, Deserialize)]
pub struct MemberHoursListResponse {
    pub member_hours: Vec<MemberHoursResponse>,
}

/// Create work log request; the server derives the team from the
/// caller's membership
#[derive(Debug, Serialize)]
pub struct CreateWorkLogRequest {
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub description: String,
}

impl CreateWorkLogRequest {
    pub fn sample() -> Self {
        Self {
            date: chrono::Utc::now().date_naive(),
            hours_worked: 3.5,
            description: "Helped at the food bank".to_string(),
        }
    }
}

/// Decision request for a single work log
#[derive(Debug, Serialize)]
pub struct DecideWorkLogRequest {
    pub status: String,
}

/// Work log response
#[derive(Debug, Deserialize)]
pub struct WorkLogResponse {
    pub id: String,
    pub volunteer_id: String,
    pub team_id: Option<String>,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub description: String,
    pub status: String,
    pub reviewed_by: Option<String>,
}

/// Work log listing
#[derive(Debug, Deserialize)]
pub struct WorkLogListResponse {
    pub work_logs: Vec<WorkLogResponse>,
}

/// Batch decision request
#[derive(Debug, Serialize)]
pub struct BatchApproveRequest {
    pub log_ids: Vec<String>,
    pub status: String,
}

/// Per-item batch outcome
#[derive(Debug, Deserialize)]
pub struct BatchItemResult {
    pub id: String,
    pub ok: bool,
    pub error: Option<String>,
}

/// Batch decision response
#[derive(Debug, Deserialize)]
pub struct BatchApproveResponse {
    pub results: Vec<BatchItemResult>,
    pub approved_count: usize,
}

/// Create project request
#[derive(Debug, Serialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub is_team_project: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl CreateProjectRequest {
    pub fn for_team(team_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Community Garden {suffix}"),
            description: "Planting season preparation".to_string(),
            is_team_project: true,
            team_id: Some(team_id.to_string()),
        }
    }

    pub fn personal() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Garden {suffix}"),
            description: "A personal planting project".to_string(),
            is_team_project: false,
            team_id: None,
        }
    }
}

/// Admin project decision request
#[derive(Debug, Serialize)]
pub struct ProjectDecisionRequest {
    pub action: String,
}

/// Project response
#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub team_id: Option<String>,
    pub is_team_project: bool,
    pub created_by: String,
    pub title: String,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Project listing
#[derive(Debug, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
}

/// Progress note request
#[derive(Debug, Serialize)]
pub struct CreateProjectUpdateRequest {
    pub title: String,
    pub description: String,
}

impl CreateProjectUpdateRequest {
    pub fn sample() -> Self {
        Self {
            title: "Progress".to_string(),
            description: "Beds dug, seeds ordered".to_string(),
        }
    }
}

/// Progress note response
#[derive(Debug, Deserialize)]
pub struct ProjectUpdateResponse {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
}

/// Progress note listing
#[derive(Debug, Deserialize)]
pub struct ProjectUpdateListResponse {
    pub updates: Vec<ProjectUpdateResponse>,
}

/// Upload document request
#[derive(Debug, Serialize)]
pub struct UploadDocumentRequest {
    pub title: String,
    pub drive_link: String,
    pub doc_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_ids: Option<Vec<String>>,
}

impl UploadDocumentRequest {
    pub fn proposal() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Proposal {suffix}"),
            drive_link: "https://docs.google.com/document/d/abc123/edit".to_string(),
            doc_type: "proposal".to_string(),
            is_global: None,
            team_ids: None,
        }
    }
}

/// Document response
#[derive(Debug, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    pub uploader_id: String,
    pub title: String,
    pub drive_link: String,
    pub doc_type: String,
    pub is_global: bool,
    pub team_ids: Vec<String>,
}

/// Document listing
#[derive(Debug, Deserialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
