//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout. Refresh
//! tokens are stored hashed in Postgres and rotated on every refresh.

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use vms_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use vms_common::{hash_token, AppError};
use vms_core::entities::User;
use vms_core::traits::RefreshToken;
use vms_core::Snowflake;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new volunteer account
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }
        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Registration always creates a volunteer; admins are provisioned
        // out of band.
        let user_id = self.ctx.generate_id();
        let user = User::new(
            user_id,
            request.username,
            request.email,
            request.first_name,
            request.last_name,
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        let token_pair = self.issue_tokens(user_id).await?;

        Ok(AuthResponse::new(
            token_pair.access_token.clone(),
            token_pair.refresh_token.clone(),
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let token_pair = self.issue_tokens(user.id).await?;

        Ok(AuthResponse::new(
            token_pair.access_token.clone(),
            token_pair.refresh_token.clone(),
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Rotate the refresh token and issue a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // The token must decode as a refresh token and still be live in
        // the store; both checks are required.
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let token_hash = hash_token(&request.refresh_token);
        let stored = self
            .ctx
            .refresh_token_repo()
            .find_by_hash(&token_hash)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !stored.is_valid() || stored.user_id != claims.user_id()? {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", stored.user_id.to_string()))?;

        // Rotation: the presented token is dead from here on
        self.ctx.refresh_token_repo().revoke(&token_hash).await?;

        let token_pair = self.issue_tokens(user.id).await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token.clone(),
            token_pair.refresh_token.clone(),
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Logout by revoking the given refresh token, or every session
    /// when none is supplied
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx
                .refresh_token_repo()
                .revoke(&hash_token(&token))
                .await?;
        } else {
            self.ctx
                .refresh_token_repo()
                .revoke_all_for_user(user_id)
                .await?;
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    /// Get user by access token
    #[instrument(skip(self, token))]
    pub async fn get_user_from_token(&self, token: &str) -> ServiceResult<User> {
        let user_id = self.validate_token(token)?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Generate a token pair and persist the hashed refresh token
    async fn issue_tokens(&self, user_id: Snowflake) -> ServiceResult<TokenPair> {
        let session_id = Uuid::new_v4().to_string();
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(user_id, Some(session_id.clone()))
            .map_err(ServiceError::from)?;

        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&token_pair.refresh_token)
            .map_err(ServiceError::from)?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ServiceError::internal("refresh token expiry out of range"))?;

        let record = RefreshToken {
            user_id,
            token_hash: hash_token(&token_pair.refresh_token),
            session_id,
            expires_at,
            revoked_at: None,
        };
        self.ctx.refresh_token_repo().create(&record).await?;

        Ok(token_pair)
    }
}
