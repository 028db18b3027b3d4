//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Document, Project, ProjectUpdate, Team, TeamMember, User, WorkLog};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// Search volunteers by name or username (prefix/substring match)
    async fn search_volunteers(&self, query: &str, limit: i64) -> RepoResult<Vec<User>>;

    /// Volunteers with no team membership at all
    async fn find_volunteers_without_team(&self) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Work Log Repository
// ============================================================================

/// Per-member approved-hours aggregate for a team
#[derive(Debug, Clone)]
pub struct MemberHours {
    pub user_id: Snowflake,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub total_hours: f64,
}

#[async_trait]
pub trait WorkLogRepository: Send + Sync {
    /// Find work log by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<WorkLog>>;

    /// List a volunteer's own logs, newest first
    async fn find_by_volunteer(&self, volunteer_id: Snowflake) -> RepoResult<Vec<WorkLog>>;

    /// List all logs for a set of teams, newest first
    async fn find_by_teams(&self, team_ids: &[Snowflake]) -> RepoResult<Vec<WorkLog>>;

    /// List every log (admin view), newest first
    async fn find_all(&self) -> RepoResult<Vec<WorkLog>>;

    /// Logs whose team is missing or deleted (admin view)
    async fn find_unassigned(&self) -> RepoResult<Vec<WorkLog>>;

    /// Create a new work log
    async fn create(&self, log: &WorkLog) -> RepoResult<()>;

    /// Update an existing work log (content or review decision)
    async fn update(&self, log: &WorkLog) -> RepoResult<()>;

    /// Delete a work log
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Sum of approved hours for a team
    async fn sum_approved_hours(&self, team_id: Snowflake) -> RepoResult<f64>;

    /// Number of pending logs for a team
    async fn count_pending(&self, team_id: Snowflake) -> RepoResult<i64>;

    /// Approved hours per member of a team, sorted descending
    async fn member_hours(&self, team_id: Snowflake) -> RepoResult<Vec<MemberHours>>;
}

// ============================================================================
// Project Repository
// ============================================================================

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find project by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Project>>;

    /// List projects for a set of teams, newest first
    async fn find_by_teams(&self, team_ids: &[Snowflake]) -> RepoResult<Vec<Project>>;

    /// List projects a volunteer can see: own projects plus team
    /// projects of teams they belong to, newest first
    async fn find_visible(
        &self,
        user_id: Snowflake,
        team_ids: &[Snowflake],
    ) -> RepoResult<Vec<Project>>;

    /// List every project (admin view), newest first
    async fn find_all(&self) -> RepoResult<Vec<Project>>;

    /// Projects whose team is missing or deleted (admin view)
    async fn find_unassigned(&self) -> RepoResult<Vec<Project>>;

    /// Create a new project
    async fn create(&self, project: &Project) -> RepoResult<()>;

    /// Update an existing project
    async fn update(&self, project: &Project) -> RepoResult<()>;

    /// Delete a project
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Number of projects belonging to a team
    async fn count_by_team(&self, team_id: Snowflake) -> RepoResult<i64>;

    /// Number of in-progress projects belonging to a team
    async fn count_active_by_team(&self, team_id: Snowflake) -> RepoResult<i64>;

    /// Attach a progress note to a project
    async fn add_update(&self, update: &ProjectUpdate) -> RepoResult<()>;

    /// List a project's progress notes, newest first
    async fn find_updates(&self, project_id: Snowflake) -> RepoResult<Vec<ProjectUpdate>>;
}

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find team by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Team>>;

    /// Find team by name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;

    /// List every team (admin view)
    async fn find_all(&self) -> RepoResult<Vec<Team>>;

    /// List teams a user belongs to
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Team>>;

    /// Create a new team
    async fn create(&self, team: &Team) -> RepoResult<()>;

    /// Update an existing team
    async fn update(&self, team: &Team) -> RepoResult<()>;

    /// Soft delete a team
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get member count for a team
    async fn member_count(&self, team_id: Snowflake) -> RepoResult<i64>;

    /// Find a specific membership
    async fn find_member(&self, team_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<TeamMember>>;

    /// List all members of a team
    async fn find_members(&self, team_id: Snowflake) -> RepoResult<Vec<TeamMember>>;

    /// List all memberships of a user
    async fn find_memberships(&self, user_id: Snowflake) -> RepoResult<Vec<TeamMember>>;

    /// Add a member to a team
    async fn add_member(&self, member: &TeamMember) -> RepoResult<()>;

    /// Remove a member from a team
    async fn remove_member(&self, team_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Document Repository
// ============================================================================

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find document by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Document>>;

    /// List every document (admin view), newest first
    async fn find_all(&self) -> RepoResult<Vec<Document>>;

    /// List documents a volunteer can see: own uploads, global documents,
    /// documents shared with their teams, and teammates' uploads
    async fn find_visible(
        &self,
        user_id: Snowflake,
        team_ids: &[Snowflake],
    ) -> RepoResult<Vec<Document>>;

    /// Create a new document
    async fn create(&self, document: &Document) -> RepoResult<()>;

    /// Delete a document
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// Stored refresh token record (hash only, never the raw token)
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub user_id: Snowflake,
    pub token_hash: String,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Check if this token is still usable
    pub fn is_valid(&self) -> bool {
        self.revoked_at.is_none() && self.expires_at > Utc::now()
    }
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a new refresh token
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Look up a token by its hash
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>>;

    /// Revoke a single token
    async fn revoke(&self, token_hash: &str) -> RepoResult<()>;

    /// Revoke every token a user holds
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()>;

    /// Remove expired tokens, returning how many were deleted
    async fn delete_expired(&self) -> RepoResult<u64>;
}
