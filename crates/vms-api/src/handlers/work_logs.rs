//! Work log handlers
//!
//! Endpoints for reporting hours and deciding on reported hours.

use axum::{
    extract::{Path, State},
    Json,
};
use vms_service::dto::{
    CreateWorkLogRequest, DecideWorkLogRequest, UpdateWorkLogRequest, WorkLogListResponse,
    WorkLogResponse,
};
use vms_service::services::WorkLogService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Report hours
///
/// POST /api/volunteers/work-logs/
pub async fn create_work_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWorkLogRequest>,
) -> ApiResult<Created<Json<WorkLogResponse>>> {
    let service = WorkLogService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// List logs visible to the caller
///
/// GET /api/volunteers/work-logs/
pub async fn list_work_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WorkLogListResponse>> {
    let service = WorkLogService::new(state.service_context());
    let response = service.list(&auth.actor()).await?;
    Ok(Json(response))
}

/// Get a single log
///
/// GET /api/volunteers/work-logs/{log_id}/
pub async fn get_work_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(log_id): Path<String>,
) -> ApiResult<Json<WorkLogResponse>> {
    let log_id = log_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid log_id format"))?;

    let service = WorkLogService::new(state.service_context());
    let response = service.get(&auth.actor(), log_id).await?;
    Ok(Json(response))
}

/// Edit an own pending log
///
/// PATCH /api/volunteers/work-logs/{log_id}/
pub async fn update_work_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(log_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateWorkLogRequest>,
) -> ApiResult<Json<WorkLogResponse>> {
    let log_id = log_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid log_id format"))?;

    let service = WorkLogService::new(state.service_context());
    let response = service.update(&auth.actor(), log_id, request).await?;
    Ok(Json(response))
}

/// Delete an own pending log
///
/// DELETE /api/volunteers/work-logs/{log_id}/
pub async fn delete_work_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(log_id): Path<String>,
) -> ApiResult<NoContent> {
    let log_id = log_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid log_id format"))?;

    let service = WorkLogService::new(state.service_context());
    service.delete(&auth.actor(), log_id).await?;
    Ok(NoContent)
}

/// Approve or reject a pending log (admins only)
///
/// POST /api/volunteers/work-logs/{log_id}/approve/
pub async fn decide_work_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(log_id): Path<String>,
    Json(request): Json<DecideWorkLogRequest>,
) -> ApiResult<Json<WorkLogResponse>> {
    let log_id = log_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid log_id format"))?;

    let service = WorkLogService::new(state.service_context());
    let response = service.decide(&auth.actor(), log_id, request).await?;
    Ok(Json(response))
}
