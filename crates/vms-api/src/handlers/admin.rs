//! Admin handlers
//!
//! Batch decisions and unassigned-resource reports.

use axum::{
    extract::{Path, State},
    Json,
};
use vms_service::dto::{
    BatchApproveRequest, BatchApproveResponse, ProjectListResponse, UserListResponse,
    WorkLogListResponse,
};
use vms_service::services::{AdminService, WorkLogService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Decide a batch of work logs for one team
///
/// POST /api/admin/teams/{team_id}/work-logs/batch-approve/
pub async fn batch_approve_work_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
    ValidatedJson(request): ValidatedJson<BatchApproveRequest>,
) -> ApiResult<Json<BatchApproveResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = WorkLogService::new(state.service_context());
    let response = service.batch_approve(&auth.actor(), team_id, request).await?;
    Ok(Json(response))
}

/// Work logs whose team is missing or deleted
///
/// GET /api/admin/work-logs/unassigned/
pub async fn unassigned_work_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WorkLogListResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.unassigned_work_logs(&auth.actor()).await?;
    Ok(Json(response))
}

/// Projects whose team is missing or deleted
///
/// GET /api/admin/projects/unassigned/
pub async fn unassigned_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.unassigned_projects(&auth.actor()).await?;
    Ok(Json(response))
}

/// Volunteers who belong to no team
///
/// GET /api/admin/volunteers/without-team/
pub async fn volunteers_without_team(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserListResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.volunteers_without_team(&auth.actor()).await?;
    Ok(Json(response))
}
