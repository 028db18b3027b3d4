//! Refresh token record <-> model mapper

use vms_core::traits::RefreshToken;
use vms_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

/// Convert RefreshTokenModel to RefreshToken record
impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            user_id: Snowflake::new(model.user_id),
            token_hash: model.token_hash,
            session_id: model.session_id,
            expires_at: model.expires_at,
            revoked_at: model.revoked_at,
        }
    }
}
