//! # vms-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! authorization policy. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ApprovalStatus, Document, DocumentType, Project, ProjectAction, ProjectStatus, ProjectUpdate,
    Team, TeamMember, TeamRole, User, UserRole, WorkLog, is_drive_link,
};
pub use error::DomainError;
pub use policy::{Action, Actor, authorize};
pub use traits::{
    DocumentRepository, MemberHours, ProjectRepository, RefreshToken, RefreshTokenRepository,
    RepoResult, TeamRepository, UserRepository, WorkLogRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
