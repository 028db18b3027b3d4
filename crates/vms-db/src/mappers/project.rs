//! Project entity <-> model mapper

use vms_core::entities::{Project, ProjectStatus, ProjectUpdate};
use vms_core::value_objects::Snowflake;

use crate::models::{ProjectModel, ProjectUpdateModel};

/// Convert ProjectModel to Project entity
impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: Snowflake::new(model.id),
            team_id: model.team_id.map(Snowflake::new),
            is_team_project: model.is_team_project,
            created_by: Snowflake::new(model.created_by),
            title: model.title,
            description: model.description,
            status: ProjectStatus::parse(&model.status).unwrap_or(ProjectStatus::Draft),
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ProjectUpdateModel to ProjectUpdate entity
impl From<ProjectUpdateModel> for ProjectUpdate {
    fn from(model: ProjectUpdateModel) -> Self {
        ProjectUpdate {
            id: Snowflake::new(model.id),
            project_id: Snowflake::new(model.project_id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
