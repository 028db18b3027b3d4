//! Database models - SQLx-compatible structs for PostgreSQL tables

mod document;
mod project;
mod refresh_token;
mod team;
mod user;
mod work_log;

pub use document::DocumentModel;
pub use project::{ProjectModel, ProjectUpdateModel};
pub use refresh_token::RefreshTokenModel;
pub use team::{TeamMemberModel, TeamModel};
pub use user::UserModel;
pub use work_log::{MemberHoursModel, WorkLogModel};
