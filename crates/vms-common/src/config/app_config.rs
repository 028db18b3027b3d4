//! Environment-driven application configuration.
//!
//! Every knob is an environment variable; `.env` files are honored in
//! development. Only `API_PORT`, `DATABASE_URL`, and `JWT_SECRET` are
//! required, everything else falls back to a sensible default.

use std::env;
use std::str::FromStr;

/// Top-level configuration assembled at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
}

/// Service identity and deployment environment
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Postgres connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Token signing settings
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

/// Request throttling settings
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// Cross-origin settings; empty means permissive in development
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// ID generator settings
#[derive(Debug, Clone)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

impl AppConfig {
    /// Assemble the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: optional("APP_NAME").unwrap_or_else(|| "vms-server".to_string()),
                env: parsed_or_default("APP_ENV", Environment::Development),
            },
            api: ServerConfig {
                host: optional("API_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: required_parsed("API_PORT")?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed_or_default("DATABASE_MAX_CONNECTIONS", 20),
                min_connections: parsed_or_default("DATABASE_MIN_CONNECTIONS", 5),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                // 15 minutes / 7 days
                access_token_expiry: parsed_or_default("JWT_ACCESS_TOKEN_EXPIRY", 900),
                refresh_token_expiry: parsed_or_default("JWT_REFRESH_TOKEN_EXPIRY", 604_800),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed_or_default("RATE_LIMIT_REQUESTS_PER_SECOND", 10),
                burst: parsed_or_default("RATE_LIMIT_BURST", 50),
            },
            cors: CorsConfig {
                allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig {
                worker_id: parsed_or_default("WORKER_ID", 0),
            },
        })
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

fn required_parsed<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    required(name)?
        .parse()
        .map_err(|_| ConfigError::MissingVar(name))
}

fn parsed_or_default<T: FromStr>(name: &str, default: T) -> T {
    optional(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
