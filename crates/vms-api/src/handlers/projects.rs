//! Project handlers
//!
//! Endpoints for the project lifecycle and progress updates.

use axum::{
    extract::{Path, State},
    Json,
};
use vms_core::entities::ProjectAction;
use vms_service::dto::{
    CreateProjectRequest, CreateProjectUpdateRequest, ProjectDecisionRequest, ProjectListResponse,
    ProjectResponse, ProjectUpdateListResponse, ProjectUpdateResponse, UpdateProjectRequest,
};
use vms_service::services::ProjectService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a draft project
///
/// POST /api/projects/
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<Created<Json<ProjectResponse>>> {
    let service = ProjectService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// List projects for the caller's teams
///
/// GET /api/projects/
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let service = ProjectService::new(state.service_context());
    let response = service.list(&auth.actor()).await?;
    Ok(Json(response))
}

/// Get a single project
///
/// GET /api/projects/{project_id}/
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.get(&auth.actor(), project_id).await?;
    Ok(Json(response))
}

/// Edit a draft project
///
/// PATCH /api/projects/{project_id}/
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.update(&auth.actor(), project_id, request).await?;
    Ok(Json(response))
}

/// Delete a draft project
///
/// DELETE /api/projects/{project_id}/
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<NoContent> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    service.delete(&auth.actor(), project_id).await?;
    Ok(NoContent)
}

/// Submit a draft for review
///
/// POST /api/projects/{project_id}/submit/
pub async fn submit_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    transition(state, auth, project_id, ProjectAction::Submit).await
}

/// Start an approved project
///
/// POST /api/projects/{project_id}/start/
pub async fn start_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    transition(state, auth, project_id, ProjectAction::Start).await
}

/// Complete an in-progress project
///
/// POST /api/projects/{project_id}/complete/
pub async fn complete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    transition(state, auth, project_id, ProjectAction::Complete).await
}

/// Admin review of a submitted project
///
/// POST /api/projects/{project_id}/approve/
pub async fn decide_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
    Json(request): Json<ProjectDecisionRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.decide(&auth.actor(), project_id, request).await?;
    Ok(Json(response))
}

/// Post a progress note to an in-progress project
///
/// POST /api/projects/{project_id}/updates/
pub async fn create_project_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateProjectUpdateRequest>,
) -> ApiResult<Created<Json<ProjectUpdateResponse>>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.post_update(&auth.actor(), project_id, request).await?;
    Ok(Created(Json(response)))
}

/// List a project's progress notes
///
/// GET /api/projects/{project_id}/updates/
pub async fn list_project_updates(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectUpdateListResponse>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.list_updates(&auth.actor(), project_id).await?;
    Ok(Json(response))
}

async fn transition(
    state: AppState,
    auth: AuthUser,
    project_id: String,
    action: ProjectAction,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = project_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid project_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.transition(&auth.actor(), project_id, action).await?;
    Ok(Json(response))
}
