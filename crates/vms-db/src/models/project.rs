//! Project database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for projects table
#[derive(Debug, Clone, FromRow)]
pub struct ProjectModel {
    pub id: i64,
    pub team_id: Option<i64>,
    pub is_team_project: bool,
    pub created_by: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for project_updates table
#[derive(Debug, Clone, FromRow)]
pub struct ProjectUpdateModel {
    pub id: i64,
    pub project_id: i64,
    pub author_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
