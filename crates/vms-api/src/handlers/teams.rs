//! Team handlers
//!
//! Endpoints for team management, membership, and team dashboards.

use axum::{
    extract::{Path, State},
    Json,
};
use vms_service::dto::{
    AddMemberRequest, CreateTeamRequest, MemberHoursListResponse, MemberListResponse,
    ProjectListResponse, TeamListResponse, TeamResponse, TeamStatsResponse, UpdateTeamRequest,
    WorkLogListResponse,
};
use vms_service::services::{ProjectService, StatsService, TeamService, WorkLogService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a team; the creator becomes its leader
///
/// POST /api/teams/
pub async fn create_team(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<Json<TeamResponse>>> {
    let service = TeamService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// List teams visible to the caller
///
/// GET /api/teams/
pub async fn list_teams(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<TeamListResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.list(&auth.actor()).await?;
    Ok(Json(response))
}

/// Get a single team
///
/// GET /api/teams/{team_id}/
pub async fn get_team(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    let response = service.get(team_id).await?;
    Ok(Json(response))
}

/// Update a team's name or description (leader or admin)
///
/// PATCH /api/teams/{team_id}/
pub async fn update_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTeamRequest>,
) -> ApiResult<Json<TeamResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    let response = service.update(&auth.actor(), team_id, request).await?;
    Ok(Json(response))
}

/// Delete a team (creator or admin); blocked while projects exist
///
/// DELETE /api/teams/{team_id}/
pub async fn delete_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<NoContent> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    service.delete(&auth.actor(), team_id).await?;
    Ok(NoContent)
}

/// Join a team as a plain member
///
/// POST /api/teams/{team_id}/join/
pub async fn join_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<NoContent> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    service.join(&auth.actor(), team_id).await?;
    Ok(NoContent)
}

/// List a team's members
///
/// GET /api/teams/{team_id}/members/
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    let response = service.members(team_id).await?;
    Ok(Json(response))
}

/// Add a volunteer to a team (leader or admin)
///
/// POST /api/teams/{team_id}/members/
pub async fn add_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddMemberRequest>,
) -> ApiResult<NoContent> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    service.add_member(&auth.actor(), team_id, request).await?;
    Ok(NoContent)
}

/// Remove a member named in the body (leader or admin); the leader
/// cannot be removed
///
/// POST /api/teams/{team_id}/remove-member/
pub async fn remove_member_by_body(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddMemberRequest>,
) -> ApiResult<NoContent> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = TeamService::new(state.service_context());
    service
        .remove_member(&auth.actor(), team_id, request.user_id)
        .await?;
    Ok(NoContent)
}

/// Remove a member (leader or admin); the leader cannot be removed
///
/// DELETE /api/teams/{team_id}/members/{user_id}/
pub async fn remove_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((team_id, user_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = TeamService::new(state.service_context());
    service.remove_member(&auth.actor(), team_id, user_id).await?;
    Ok(NoContent)
}

/// List a team's work logs (members and admins)
///
/// GET /api/teams/{team_id}/work-logs/
pub async fn team_work_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<WorkLogListResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = WorkLogService::new(state.service_context());
    let response = service.list_for_team(&auth.actor(), team_id).await?;
    Ok(Json(response))
}

/// List a team's projects (members and admins)
///
/// GET /api/teams/{team_id}/projects/
pub async fn team_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<ProjectListResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = ProjectService::new(state.service_context());
    let response = service.list_for_team(&auth.actor(), team_id).await?;
    Ok(Json(response))
}

/// Team dashboard numbers
///
/// GET /api/teams/{team_id}/stats/
pub async fn team_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamStatsResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = StatsService::new(state.service_context());
    let response = service.team_stats(&auth.actor(), team_id).await?;
    Ok(Json(response))
}

/// Per-member approved hours, sorted descending
///
/// GET /api/teams/{team_id}/member-hours/
pub async fn member_hours(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<String>,
) -> ApiResult<Json<MemberHoursListResponse>> {
    let team_id = team_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = StatsService::new(state.service_context());
    let response = service.member_hours(&auth.actor(), team_id).await?;
    Ok(Json(response))
}
