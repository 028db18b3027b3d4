//! Team entity <-> model mapper

use vms_core::entities::{Team, TeamMember, TeamRole};
use vms_core::value_objects::Snowflake;

use crate::models::{TeamMemberModel, TeamModel};

/// Convert TeamModel to Team entity
impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Convert TeamMemberModel to TeamMember entity
impl From<TeamMemberModel> for TeamMember {
    fn from(model: TeamMemberModel) -> Self {
        TeamMember {
            team_id: Snowflake::new(model.team_id),
            user_id: Snowflake::new(model.user_id),
            role: TeamRole::parse(&model.role).unwrap_or(TeamRole::Member),
            joined_at: model.joined_at,
        }
    }
}
