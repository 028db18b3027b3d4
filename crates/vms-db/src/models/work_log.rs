//! Work log database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for work_logs table
#[derive(Debug, Clone, FromRow)]
pub struct WorkLogModel {
    pub id: i64,
    pub volunteer_id: i64,
    pub team_id: Option<i64>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub status: String,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate row for per-member approved hours
#[derive(Debug, Clone, FromRow)]
pub struct MemberHoursModel {
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub total_hours: f64,
}
