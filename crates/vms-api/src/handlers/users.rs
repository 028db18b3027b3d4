//! User handlers
//!
//! Volunteer search for team building.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use vms_service::dto::UserListResponse;
use vms_service::services::AdminService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for user search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search volunteers by name or username
///
/// GET /api/users/search/?q=
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.search_users(&query.q).await?;
    Ok(Json(response))
}
