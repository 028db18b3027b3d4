//! Domain entities - core business objects

mod document;
mod project;
mod project_update;
mod team;
mod team_member;
mod user;
mod work_log;

pub use document::{Document, DocumentType, is_drive_link};
pub use project::{Project, ProjectAction, ProjectStatus};
pub use project_update::ProjectUpdate;
pub use team::Team;
pub use team_member::{TeamMember, TeamRole};
pub use user::{User, UserRole};
pub use work_log::{ApprovalStatus, WorkLog};
