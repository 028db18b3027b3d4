//! Project update entity - a progress note on an approved or running project

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Progress note attached to a project. Append-only; posted by the
/// project's creator while the project is approved or in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub id: Snowflake,
    pub project_id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ProjectUpdate {
    pub fn new(
        id: Snowflake,
        project_id: Snowflake,
        author_id: Snowflake,
        title: String,
        description: String,
    ) -> Self {
        Self {
            id,
            project_id,
            author_id,
            title,
            description,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
