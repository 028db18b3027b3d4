//! Team database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TeamModel {
    /// Check if team is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Database model for team_members table
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberModel {
    pub team_id: i64,
    pub user_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}
