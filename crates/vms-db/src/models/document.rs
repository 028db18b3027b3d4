//! Document database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for documents joined with their shared team ids
/// (aggregated from document_teams)
#[derive(Debug, Clone, FromRow)]
pub struct DocumentModel {
    pub id: i64,
    pub uploader_id: i64,
    pub title: String,
    pub drive_link: String,
    pub doc_type: String,
    pub is_global: bool,
    pub team_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
}
