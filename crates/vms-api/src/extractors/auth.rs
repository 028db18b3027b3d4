//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header,
//! then resolves the caller's account so handlers know the role.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use vms_common::AppError;
use vms_core::entities::UserRole;
use vms_core::policy::Actor;
use vms_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: Snowflake,
    /// Role of the account the token belongs to
    pub role: UserRole,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// The caller as the policy sees it
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        // The role lives on the account, not in the token, so a role
        // change takes effect on the next request
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Domain)?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token for unknown or deleted account");
                ApiError::App(AppError::InvalidToken)
            })?;

        Ok(AuthUser::new(user.id, user.role))
    }
}
