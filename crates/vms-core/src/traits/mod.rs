//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    DocumentRepository, MemberHours, ProjectRepository, RefreshToken, RefreshTokenRepository,
    RepoResult, TeamRepository, UserRepository, WorkLogRepository,
};
