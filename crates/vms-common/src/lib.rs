//! # vms-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! retry, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod retry;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, hash_token, validate_password_strength, verify_password, Claims, JwtService,
    TokenPair, TokenType,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SnowflakeConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
