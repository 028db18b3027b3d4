//! Row type for the refresh_tokens table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One stored refresh token; only the SHA-256 hash ever hits the table.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenModel {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenModel {
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Usable for a refresh: neither revoked nor past its expiry.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}
