//! Work log entity <-> model mapper

use vms_core::entities::{ApprovalStatus, WorkLog};
use vms_core::traits::MemberHours;
use vms_core::value_objects::Snowflake;

use crate::models::{MemberHoursModel, WorkLogModel};

/// Convert WorkLogModel to WorkLog entity
impl From<WorkLogModel> for WorkLog {
    fn from(model: WorkLogModel) -> Self {
        WorkLog {
            id: Snowflake::new(model.id),
            volunteer_id: Snowflake::new(model.volunteer_id),
            team_id: model.team_id.map(Snowflake::new),
            date: model.date,
            hours: model.hours,
            description: model.description,
            status: ApprovalStatus::parse(&model.status).unwrap_or(ApprovalStatus::Pending),
            reviewed_by: model.reviewed_by.map(Snowflake::new),
            reviewed_at: model.reviewed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert aggregate row to MemberHours
impl From<MemberHoursModel> for MemberHours {
    fn from(model: MemberHoursModel) -> Self {
        MemberHours {
            user_id: Snowflake::new(model.user_id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            total_hours: model.total_hours,
        }
    }
}
