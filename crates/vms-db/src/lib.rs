//! # vms-db
//!
//! PostgreSQL implementations of the `vms-core` repository traits.
//!
//! Each aggregate gets three pieces: a `FromRow` model mirroring its table,
//! a mapper converting the model into the domain entity, and a `Pg*`
//! repository doing the actual SQL. Pool construction and the embedded
//! migrations live in [`pool`].

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, create_pool_with_retry, run_migrations, DatabaseConfig,
    PgPool,
};
pub use repositories::{
    PgDocumentRepository, PgProjectRepository, PgRefreshTokenRepository, PgTeamRepository,
    PgUserRepository, PgWorkLogRepository,
};
