//! Request handlers for all API endpoints

pub mod admin;
pub mod auth;
pub mod documents;
pub mod health;
pub mod projects;
pub mod teams;
pub mod users;
pub mod work_logs;
