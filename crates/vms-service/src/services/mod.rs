//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod context;
pub mod document;
pub mod error;
pub mod project;
pub mod stats;
pub mod team;
pub mod work_log;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use document::DocumentService;
pub use error::{ServiceError, ServiceResult};
pub use project::ProjectService;
pub use stats::StatsService;
pub use team::TeamService;
pub use work_log::WorkLogService;
