//! Entity to model mappers
//!
//! This module provides conversions between domain entities (vms-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects. Status and
//! role columns are stored as text; unknown values fall back to the safest default.

mod document;
mod project;
mod refresh_token;
mod team;
mod user;
mod work_log;
