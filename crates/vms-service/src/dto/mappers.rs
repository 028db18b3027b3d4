//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use vms_core::entities::{Document, Project, ProjectUpdate, Team, User, WorkLog};
use vms_core::traits::MemberHours;

use super::responses::{
    CurrentUserResponse, DocumentResponse, MemberHoursResponse, ProjectResponse,
    ProjectUpdateResponse, TeamResponse, UserResponse, WorkLogResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Work Log Mappers
// ============================================================================

impl From<&WorkLog> for WorkLogResponse {
    fn from(log: &WorkLog) -> Self {
        Self {
            id: log.id.to_string(),
            volunteer_id: log.volunteer_id.to_string(),
            team_id: log.team_id.map(|id| id.to_string()),
            date: log.date,
            hours_worked: log.hours,
            description: log.description.clone(),
            status: log.status.as_str().to_string(),
            reviewed_by: log.reviewed_by.map(|id| id.to_string()),
            reviewed_at: log.reviewed_at,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}

impl From<WorkLog> for WorkLogResponse {
    fn from(log: WorkLog) -> Self {
        Self::from(&log)
    }
}

impl From<MemberHours> for MemberHoursResponse {
    fn from(row: MemberHours) -> Self {
        Self {
            user_id: row.user_id.to_string(),
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            total_hours: row.total_hours,
        }
    }
}

// ============================================================================
// Project Mappers
// ============================================================================

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            team_id: project.team_id.map(|id| id.to_string()),
            is_team_project: project.is_team_project,
            created_by: project.created_by.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
            start_date: project.start_date,
            end_date: project.end_date,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self::from(&project)
    }
}

impl From<&ProjectUpdate> for ProjectUpdateResponse {
    fn from(update: &ProjectUpdate) -> Self {
        Self {
            id: update.id.to_string(),
            project_id: update.project_id.to_string(),
            author_id: update.author_id.to_string(),
            title: update.title.clone(),
            description: update.description.clone(),
            created_at: update.created_at,
        }
    }
}

impl From<ProjectUpdate> for ProjectUpdateResponse {
    fn from(update: ProjectUpdate) -> Self {
        Self::from(&update)
    }
}

// ============================================================================
// Team Mappers
// ============================================================================

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name.clone(),
            description: team.description.clone(),
            created_by: team.created_by.to_string(),
            created_at: team.created_at,
        }
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}

// ============================================================================
// Document Mappers
// ============================================================================

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id.to_string(),
            uploader_id: document.uploader_id.to_string(),
            title: document.title.clone(),
            drive_link: document.drive_link.clone(),
            doc_type: document.doc_type.as_str().to_string(),
            is_global: document.is_global,
            team_ids: document.team_ids.iter().map(ToString::to_string).collect(),
            created_at: document.created_at,
        }
    }
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self::from(&document)
    }
}
