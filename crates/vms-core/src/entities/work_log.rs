//! Work log entity - hours a volunteer reports, optionally against a team

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum hours a single log may claim
pub const MAX_HOURS_PER_LOG: f64 = 24.0;

/// Review status of a work log. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }
}

/// Work log entity
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLog {
    pub id: Snowflake,
    pub volunteer_id: Snowflake,
    /// Derived from the volunteer's membership at creation time; a
    /// volunteer with no team logs hours without one.
    pub team_id: Option<Snowflake>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: String,
    pub status: ApprovalStatus,
    pub reviewed_by: Option<Snowflake>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkLog {
    /// Create a new pending work log
    pub fn new(
        id: Snowflake,
        volunteer_id: Snowflake,
        team_id: Option<Snowflake>,
        date: NaiveDate,
        hours: f64,
        description: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            volunteer_id,
            team_id,
            date,
            hours,
            description,
            status: ApprovalStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate reported hours: positive, at most one day's worth
    pub fn validate_hours(hours: f64) -> Result<(), DomainError> {
        if !hours.is_finite() || hours <= 0.0 || hours > MAX_HOURS_PER_LOG {
            return Err(DomainError::InvalidHours(hours));
        }
        Ok(())
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.volunteer_id == user_id
    }

    /// Record a review decision. Only pending logs can be decided;
    /// approved and rejected are terminal.
    pub fn decide(
        &mut self,
        status: ApprovalStatus,
        reviewer_id: Snowflake,
    ) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::WorkLogAlreadyDecided(self.id));
        }
        if status == ApprovalStatus::Pending {
            return Err(DomainError::ValidationError(
                "decision must be approved or rejected".to_string(),
            ));
        }
        self.status = status;
        self.reviewed_by = Some(reviewer_id);
        self.reviewed_at = Some(Utc::now());
        self.updated_at = Utc::now();
        Ok(())
    }
}
