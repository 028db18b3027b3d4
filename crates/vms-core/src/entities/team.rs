//! Team entity - a named group volunteers belong to

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Team {
    /// Create a new Team
    pub fn new(id: Snowflake, name: String, created_by: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            created_by,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[inline]
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.created_by == user_id
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Update the team description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}
