//! Repository implementations

pub mod document;
pub mod error;
pub mod project;
pub mod refresh_token;
pub mod team;
pub mod user;
pub mod work_log;

pub use document::PgDocumentRepository;
pub use project::PgProjectRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
pub use work_log::PgWorkLogRepository;
