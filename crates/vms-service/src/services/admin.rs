//! Admin reporting and user search
//!
//! Unassigned-resource views surface rows whose team has been deleted so
//! an admin can reassign or clean them up.

use tracing::instrument;
use vms_core::policy::{authorize, Action, Actor};

use crate::dto::{
    ProjectListResponse, ProjectResponse, UserListResponse, UserResponse, WorkLogListResponse,
    WorkLogResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum results returned by user search
const SEARCH_LIMIT: i64 = 10;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Work logs whose team is missing or deleted
    #[instrument(skip(self))]
    pub async fn unassigned_work_logs(&self, actor: &Actor) -> ServiceResult<WorkLogListResponse> {
        authorize(actor, Action::ViewAdminReports)?;

        let logs = self.ctx.work_log_repo().find_unassigned().await?;
        Ok(WorkLogListResponse {
            work_logs: logs.iter().map(WorkLogResponse::from).collect(),
        })
    }

    /// Projects whose team is missing or deleted
    #[instrument(skip(self))]
    pub async fn unassigned_projects(&self, actor: &Actor) -> ServiceResult<ProjectListResponse> {
        authorize(actor, Action::ViewAdminReports)?;

        let projects = self.ctx.project_repo().find_unassigned().await?;
        Ok(ProjectListResponse {
            projects: projects.iter().map(ProjectResponse::from).collect(),
        })
    }

    /// Volunteers who belong to no team at all
    #[instrument(skip(self))]
    pub async fn volunteers_without_team(&self, actor: &Actor) -> ServiceResult<UserListResponse> {
        authorize(actor, Action::ViewAdminReports)?;

        let users = self.ctx.user_repo().find_volunteers_without_team().await?;
        Ok(UserListResponse {
            users: users.iter().map(UserResponse::from).collect(),
        })
    }

    /// Search volunteers by name or username (any authenticated caller)
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> ServiceResult<UserListResponse> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Err(ServiceError::validation(
                "Search query must be at least 2 characters",
            ));
        }

        let users = self
            .ctx
            .user_repo()
            .search_volunteers(query, SEARCH_LIMIT)
            .await?;

        Ok(UserListResponse {
            users: users.iter().map(UserResponse::from).collect(),
        })
    }
}
