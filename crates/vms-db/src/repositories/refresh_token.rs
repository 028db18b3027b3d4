//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vms_core::traits::{RefreshToken, RefreshTokenRepository, RepoResult};
use vms_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (user_id, token_hash, session_id, expires_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(token.user_id.into_inner())
        .bind(&token.token_hash)
        .bind(&token.session_id)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token_hash))]
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT id, user_id, token_hash, session_id, expires_at, created_at, revoked_at
            FROM refresh_tokens
            WHERE token_hash = $1
            ",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token_hash))]
    async fn revoke(&self, token_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = NOW()
            WHERE token_hash = $1 AND revoked_at IS NULL
            ",
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = NOW()
            WHERE user_id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM refresh_tokens WHERE expires_at < NOW()
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
