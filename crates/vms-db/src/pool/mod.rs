//! Connection pool management

mod postgres;

pub use postgres::{
    create_pool, create_pool_from_env, create_pool_with_retry, run_migrations, DatabaseConfig,
};
pub use sqlx::PgPool;
