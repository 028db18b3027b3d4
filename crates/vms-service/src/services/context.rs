//! Dependency container shared by every service.

use std::sync::Arc;

use vms_common::auth::JwtService;
use vms_core::traits::{
    DocumentRepository, ProjectRepository, RefreshTokenRepository, TeamRepository, UserRepository,
    WorkLogRepository,
};
use vms_core::SnowflakeGenerator;
use vms_db::PgPool;

/// Repositories, the JWT service, and the ID generator behind one handle.
/// Services borrow this per request instead of owning their dependencies.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    user_repo: Arc<dyn UserRepository>,
    work_log_repo: Arc<dyn WorkLogRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    team_repo: Arc<dyn TeamRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        work_log_repo: Arc<dyn WorkLogRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        team_repo: Arc<dyn TeamRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            work_log_repo,
            project_repo,
            team_repo,
            document_repo,
            refresh_token_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn work_log_repo(&self) -> &dyn WorkLogRepository {
        self.work_log_repo.as_ref()
    }

    pub fn project_repo(&self) -> &dyn ProjectRepository {
        self.project_repo.as_ref()
    }

    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    pub fn document_repo(&self) -> &dyn DocumentRepository {
        self.document_repo.as_ref()
    }

    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Mint a fresh ID for a new aggregate.
    pub fn generate_id(&self) -> vms_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Step-by-step construction for [`ServiceContext`]; `build` rejects a
/// partially wired context instead of panicking.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    work_log_repo: Option<Arc<dyn WorkLogRepository>>,
    project_repo: Option<Arc<dyn ProjectRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    document_repo: Option<Arc<dyn DocumentRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn work_log_repo(mut self, repo: Arc<dyn WorkLogRepository>) -> Self {
        self.work_log_repo = Some(repo);
        self
    }

    pub fn project_repo(mut self, repo: Arc<dyn ProjectRepository>) -> Self {
        self.project_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn document_repo(mut self, repo: Arc<dyn DocumentRepository>) -> Self {
        self.document_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.work_log_repo
                .ok_or_else(|| ServiceError::validation("work_log_repo is required"))?,
            self.project_repo
                .ok_or_else(|| ServiceError::validation("project_repo is required"))?,
            self.team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            self.document_repo
                .ok_or_else(|| ServiceError::validation("document_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
