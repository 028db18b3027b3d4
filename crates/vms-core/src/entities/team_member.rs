//! Team member entity - a user's membership in a team

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Membership role within a team. Each team has one leader (its creator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Leader,
    Member,
}

impl TeamRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "leader" => Some(Self::Leader),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

/// Team membership entity (junction between User and Team)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub team_id: Snowflake,
    pub user_id: Snowflake,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a plain membership
    pub fn new(team_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            team_id,
            user_id,
            role: TeamRole::Member,
            joined_at: Utc::now(),
        }
    }

    /// Create the leader membership for a team's creator
    pub fn leader(team_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            team_id,
            user_id,
            role: TeamRole::Leader,
            joined_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_leader(&self) -> bool {
        self.role == TeamRole::Leader
    }
}
