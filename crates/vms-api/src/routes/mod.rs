//! Route definitions
//!
//! All API routes organized by domain and mounted under /api. Paths keep
//! a trailing slash for compatibility with existing clients.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, documents, health, projects, teams, users, work_logs};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(work_log_routes())
        .merge(project_routes())
        .merge(team_routes())
        .merge(document_routes())
        .merge(admin_routes())
        .merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register/", post(auth::register))
        .route("/auth/login/", post(auth::login))
        .route("/auth/refresh/", post(auth::refresh_token))
        .route("/auth/logout/", post(auth::logout))
        .route("/auth/me/", get(auth::me))
}

/// Work log routes
fn work_log_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers/work-logs/", post(work_logs::create_work_log))
        .route("/volunteers/work-logs/create/", post(work_logs::create_work_log))
        .route("/volunteers/work-logs/", get(work_logs::list_work_logs))
        .route("/volunteers/work-logs/:log_id/", get(work_logs::get_work_log))
        .route("/volunteers/work-logs/:log_id/", patch(work_logs::update_work_log))
        .route("/volunteers/work-logs/:log_id/", delete(work_logs::delete_work_log))
        .route(
            "/volunteers/work-logs/:log_id/approve/",
            post(work_logs::decide_work_log),
        )
}

/// Project routes
fn project_routes() -> Router<AppState> {
    Router::new()
        // Project CRUD
        .route("/projects/", post(projects::create_project))
        .route("/projects/create/", post(projects::create_project))
        .route("/projects/", get(projects::list_projects))
        .route("/projects/:project_id/", get(projects::get_project))
        .route("/projects/:project_id/", patch(projects::update_project))
        .route("/projects/:project_id/", delete(projects::delete_project))
        .route("/projects/:project_id/delete/", delete(projects::delete_project))
        // Lifecycle
        .route("/projects/:project_id/submit/", post(projects::submit_project))
        .route("/projects/:project_id/start/", post(projects::start_project))
        .route("/projects/:project_id/complete/", post(projects::complete_project))
        .route("/projects/:project_id/approve/", post(projects::decide_project))
        // Progress updates
        .route("/projects/:project_id/updates/", post(projects::create_project_update))
        .route("/projects/:project_id/updates/", get(projects::list_project_updates))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        // Team CRUD
        .route("/teams/", post(teams::create_team))
        .route("/teams/", get(teams::list_teams))
        .route("/teams/:team_id/", get(teams::get_team))
        .route("/teams/:team_id/", patch(teams::update_team))
        .route("/teams/:team_id/", delete(teams::delete_team))
        // Membership
        .route("/teams/:team_id/join/", post(teams::join_team))
        .route("/teams/:team_id/members/", get(teams::list_members))
        .route("/teams/:team_id/members/", post(teams::add_member))
        .route("/teams/:team_id/add-member/", post(teams::add_member))
        .route("/teams/:team_id/members/:user_id/", delete(teams::remove_member))
        .route("/teams/:team_id/remove-member/", post(teams::remove_member_by_body))
        // Team-scoped views and dashboards
        .route("/teams/:team_id/work-logs/", get(teams::team_work_logs))
        .route("/teams/:team_id/projects/", get(teams::team_projects))
        .route("/teams/:team_id/stats/", get(teams::team_stats))
        .route("/teams/:team_id/member-hours/", get(teams::member_hours))
}

/// Document routes, served under the volunteer prefix with the short
/// prefix kept as an alias
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers/documents/", post(documents::upload_document))
        .route("/volunteers/documents/", get(documents::list_documents))
        .route("/volunteers/documents/:document_id/", get(documents::get_document))
        .route(
            "/volunteers/documents/:document_id/",
            delete(documents::delete_document),
        )
        .route("/documents/", post(documents::upload_document))
        .route("/documents/", get(documents::list_documents))
        .route("/documents/:document_id/", get(documents::get_document))
        .route("/documents/:document_id/", delete(documents::delete_document))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/teams/:team_id/work-logs/batch-approve/",
            post(admin::batch_approve_work_logs),
        )
        .route("/admin/work-logs/unassigned/", get(admin::unassigned_work_logs))
        .route("/admin/projects/unassigned/", get(admin::unassigned_projects))
        .route(
            "/admin/volunteers/without-team/",
            get(admin::volunteers_without_team),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/search/", get(users::search_users))
}
