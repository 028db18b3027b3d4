//! users row to `User` entity conversion.

use vms_core::entities::{User, UserRole};
use vms_core::value_objects::Snowflake;

use crate::models::UserModel;

// An unknown role string maps to the least-privileged role.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            role: UserRole::parse(&model.role).unwrap_or(UserRole::Volunteer),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
