//! Project entity - a personal or team initiative moving through an
//! approval pipeline

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Project lifecycle status.
///
/// Transitions are forward-only:
/// draft -> submitted -> (approved -> in_progress -> completed) | rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// No action leaves a terminal status
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    /// Compute the successor status for an action, or the conflict error
    pub fn apply(self, action: ProjectAction) -> Result<Self, DomainError> {
        match (self, action) {
            (Self::Draft, ProjectAction::Submit) => Ok(Self::Submitted),
            (Self::Submitted, ProjectAction::Approve) => Ok(Self::Approved),
            (Self::Submitted, ProjectAction::Reject) => Ok(Self::Rejected),
            (Self::Approved, ProjectAction::Start) => Ok(Self::InProgress),
            (Self::InProgress, ProjectAction::Complete) => Ok(Self::Completed),
            _ => Err(DomainError::InvalidTransition {
                from: self.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

/// Lifecycle actions a caller may request on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Submit,
    Approve,
    Reject,
    Start,
    Complete,
}

impl ProjectAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Start => "start",
            Self::Complete => "complete",
        }
    }

    /// Actions reserved to admins; the rest belong to the project creator
    #[inline]
    pub fn is_review(self) -> bool {
        matches!(self, Self::Approve | Self::Reject)
    }
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Snowflake,
    /// Team the project belongs to; personal projects have none.
    pub team_id: Option<Snowflake>,
    /// Team projects are visible to all team members, but only the
    /// creator drives the lifecycle.
    pub is_team_project: bool,
    pub created_by: Snowflake,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new draft project
    pub fn new(
        id: Snowflake,
        team_id: Option<Snowflake>,
        is_team_project: bool,
        created_by: Snowflake,
        title: String,
        description: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_id,
            is_team_project,
            created_by,
            title,
            description,
            status: ProjectStatus::Draft,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.created_by == user_id
    }

    /// Drafts are the only editable stage. Deletion by the creator is
    /// allowed at any status and cascades to progress notes.
    #[inline]
    pub fn is_editable(&self) -> bool {
        self.status == ProjectStatus::Draft
    }

    /// Advance the lifecycle. `start` stamps the start date and
    /// `complete` the end date, both with today's date.
    pub fn transition(&mut self, action: ProjectAction) -> Result<(), DomainError> {
        let next = self.status.apply(action)?;
        match action {
            ProjectAction::Start => self.start_date = Some(Utc::now().date_naive()),
            ProjectAction::Complete => self.end_date = Some(Utc::now().date_naive()),
            _ => {}
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
