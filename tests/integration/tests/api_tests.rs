//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, promote_to_admin, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Setup helpers
// ============================================================================

/// Register a fresh volunteer and return the auth payload
async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register/", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Register a fresh account and promote it to admin
///
/// The role is read from the account on every request, so the original
/// token keeps working after promotion.
async fn register_admin(server: &TestServer) -> AuthResponse {
    let auth = register(server).await;
    promote_to_admin(&auth.user.id).await.unwrap();
    auth
}

/// Create a team as the given user
async fn create_team(server: &TestServer, token: &str) -> TeamResponse {
    let request = CreateTeamRequest::unique();
    let response = server.post_auth("/api/teams/", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Report hours as the given user; the server derives the team from
/// the caller's membership
async fn create_work_log(server: &TestServer, token: &str) -> WorkLogResponse {
    let request = CreateWorkLogRequest::sample();
    let response = server
        .post_auth("/api/volunteers/work-logs/", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register/", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "volunteer");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/auth/register/", &request).await.unwrap();

    let response = server.post("/api/auth/register/", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase".to_string();

    let response = server.post("/api/auth/register/", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/auth/register/", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login/", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/auth/register/", &register_req).await.unwrap();

    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/auth/login/", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_rotates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/auth/refresh/", &refresh_req).await.unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.access_token.is_empty());

    // The old refresh token is dead after rotation
    let response = server.post("/api/auth/refresh/", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth("/api/auth/logout/", &auth.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // All sessions are revoked, so the refresh token no longer works
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/auth/refresh/", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server.get_auth("/api/auth/me/", &auth.access_token).await.unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, auth.user.username);
}

#[tokio::test]
async fn test_me_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/auth/me/").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_create_team_creator_is_leader() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let team = create_team(&server, &auth.access_token).await;
    assert_eq!(team.created_by, auth.user.id);

    let response = server
        .get_auth(&format!("/api/teams/{}/members/", team.id), &auth.access_token)
        .await
        .unwrap();
    let members: MemberListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(members.members.len(), 1);
    assert_eq!(members.members[0].user_id, auth.user.id);
    assert_eq!(members.members[0].role, "leader");
}

#[tokio::test]
async fn test_join_team_duplicate_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let joiner = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    let response = server
        .post_auth(&format!("/api/teams/{}/join/", team.id), &joiner.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(&format!("/api/teams/{}/join/", team.id), &joiner.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_add_member_requires_leader() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let member = register(&server).await;
    let outsider = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    // A non-leader cannot add members
    let request = AddMemberRequest {
        user_id: member.user.id.clone(),
    };
    let response = server
        .post_auth(
            &format!("/api/teams/{}/members/", team.id),
            &outsider.access_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The leader can
    let response = server
        .post_auth(
            &format!("/api/teams/{}/members/", team.id),
            &leader.access_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_leader_cannot_be_removed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    let response = server
        .delete_auth(
            &format!("/api/teams/{}/members/{}/", team.id, leader.user.id),
            &leader.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_delete_team_blocked_by_projects() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    let project_req = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &leader.access_token, &project_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/teams/{}/", team.id), &leader.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_volunteer_sees_only_own_teams() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let b = register(&server).await;
    let team_a = create_team(&server, &a.access_token).await;
    create_team(&server, &b.access_token).await;

    let response = server.get_auth("/api/teams/", &a.access_token).await.unwrap();
    let teams: TeamListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(teams.teams.iter().any(|t| t.id == team_a.id));
    assert!(teams.teams.iter().all(|t| t.created_by == a.user.id));
}

// ============================================================================
// Work Log Tests
// ============================================================================

#[tokio::test]
async fn test_create_work_log() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let team = create_team(&server, &auth.access_token).await;

    let log = create_work_log(&server, &auth.access_token).await;
    assert_eq!(log.status, "pending");
    assert_eq!(log.volunteer_id, auth.user.id);
    assert_eq!(log.team_id.as_deref(), Some(team.id.as_str()));
}

#[tokio::test]
async fn test_work_log_without_team_lands_unassigned() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let teamless = register(&server).await;
    let admin = register_admin(&server).await;

    // No membership, so the log carries no team
    let log = create_work_log(&server, &teamless.access_token).await;
    assert!(log.team_id.is_none());

    // It shows up in the admin review queue for unassigned logs
    let response = server
        .get_auth("/api/admin/work-logs/unassigned/", &admin.access_token)
        .await
        .unwrap();
    let logs: WorkLogListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs.work_logs.iter().any(|l| l.id == log.id));
}

#[tokio::test]
async fn test_work_log_hours_validated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let mut request = CreateWorkLogRequest::sample();
    request.hours_worked = 25.0;
    let response = server
        .post_auth("/api/volunteers/work-logs/", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_decide_work_log_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let log = create_work_log(&server, &auth.access_token).await;

    let decide = DecideWorkLogRequest {
        status: "approved".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/volunteers/work-logs/{}/approve/", log.id),
            &auth.access_token,
            &decide,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_decided_work_log_is_terminal() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let admin = register_admin(&server).await;
    let log = create_work_log(&server, &volunteer.access_token).await;

    // Approve
    let decide = DecideWorkLogRequest {
        status: "approved".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/volunteers/work-logs/{}/approve/", log.id),
            &admin.access_token,
            &decide,
        )
        .await
        .unwrap();
    let decided: WorkLogResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decided.status, "approved");
    assert_eq!(decided.reviewed_by.as_deref(), Some(admin.user.id.as_str()));

    // Deciding again is a conflict
    let response = server
        .post_auth(
            &format!("/api/volunteers/work-logs/{}/approve/", log.id),
            &admin.access_token,
            &decide,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // And the owner can no longer edit it
    let patch = serde_json::json!({ "hours_worked": 2.0 });
    let response = server
        .patch_auth(
            &format!("/api/volunteers/work-logs/{}/", log.id),
            &volunteer.access_token,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_work_log_invisible_to_strangers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let stranger = register(&server).await;
    let log = create_work_log(&server, &owner.access_token).await;

    let response = server
        .get_auth(
            &format!("/api/volunteers/work-logs/{}/", log.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_batch_approve_partial_failures() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let other_volunteer = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;
    create_team(&server, &other_volunteer.access_token).await;

    let good = create_work_log(&server, &volunteer.access_token).await;
    // Belongs to the other volunteer's team, not the one under review
    let wrong_team = create_work_log(&server, &other_volunteer.access_token).await;

    let request = BatchApproveRequest {
        log_ids: vec![
            good.id.clone(),
            wrong_team.id.clone(),
            "999999999999".to_string(),
        ],
        status: "approved".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/admin/teams/{}/work-logs/batch-approve/", team.id),
            &admin.access_token,
            &request,
        )
        .await
        .unwrap();
    let batch: BatchApproveResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(batch.approved_count, 1);
    assert_eq!(batch.results.len(), 3);
    assert!(batch.results[0].ok);
    assert!(!batch.results[1].ok);
    assert!(batch.results[1].error.is_some());
    assert!(!batch.results[2].ok);
}

// ============================================================================
// Project Tests
// ============================================================================

#[tokio::test]
async fn test_project_full_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    // Create draft
    let request = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(project.status, "draft");

    // Submit
    let response = server
        .post_auth(
            &format!("/api/projects/{}/submit/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(project.status, "submitted");

    // Approve (admin)
    let decision = ProjectDecisionRequest {
        action: "approve".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/projects/{}/approve/", project.id),
            &admin.access_token,
            &decision,
        )
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(project.status, "approved");

    // Start stamps start_date
    let response = server
        .post_auth(
            &format!("/api/projects/{}/start/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(project.status, "in_progress");
    assert!(project.start_date.is_some());

    // Complete stamps end_date
    let response = server
        .post_auth(
            &format!("/api/projects/{}/complete/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(project.status, "completed");
    assert!(project.end_date.is_some());
}

#[tokio::test]
async fn test_project_invalid_transition_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    let request = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Cannot start a draft
    let response = server
        .post_auth(
            &format!("/api/projects/{}/start/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_project_review_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    let request = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/projects/{}/submit/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();

    let decision = ProjectDecisionRequest {
        action: "approve".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/projects/{}/approve/", project.id),
            &volunteer.access_token,
            &decision,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_project_updates_require_active_project() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let teammate = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    server
        .post_auth(&format!("/api/teams/{}/join/", team.id), &teammate.access_token, &())
        .await
        .unwrap();

    let request = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Posting to a draft is a conflict
    let note = CreateProjectUpdateRequest::sample();
    let response = server
        .post_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &volunteer.access_token,
            &note,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Approval opens the project for notes
    server
        .post_auth(
            &format!("/api/projects/{}/submit/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let decision = ProjectDecisionRequest {
        action: "approve".to_string(),
    };
    server
        .post_auth(
            &format!("/api/projects/{}/approve/", project.id),
            &admin.access_token,
            &decision,
        )
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &volunteer.access_token,
            &note,
        )
        .await
        .unwrap();
    let posted: ProjectUpdateResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.author_id, volunteer.user.id);
    assert_eq!(posted.title, note.title);
    assert_eq!(posted.description, note.description);

    // Teammates read notes but only the creator posts them
    let response = server
        .post_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &teammate.access_token,
            &note,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Still open after the work starts
    server
        .post_auth(
            &format!("/api/projects/{}/start/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let response = server
        .post_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &volunteer.access_token,
            &note,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &teammate.access_token,
        )
        .await
        .unwrap();
    let updates: ProjectUpdateListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updates.updates.len(), 2);
}

#[tokio::test]
async fn test_personal_project_without_team() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let stranger = register(&server).await;
    let admin = register_admin(&server).await;

    // No team anywhere in sight
    let request = CreateProjectRequest::personal();
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(project.team_id.is_none());
    assert!(!project.is_team_project);
    assert_eq!(project.status, "draft");

    // Only the creator and admins see it
    let response = server
        .get_auth(&format!("/api/projects/{}/", project.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Rejection is terminal
    server
        .post_auth(
            &format!("/api/projects/{}/submit/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let decision = ProjectDecisionRequest {
        action: "reject".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/projects/{}/approve/", project.id),
            &admin.access_token,
            &decision,
        )
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(project.status, "rejected");

    let response = server
        .post_auth(
            &format!("/api/projects/{}/start/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_team_project_requires_named_team() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    // Marked as a team project but names no team
    let mut request = CreateProjectRequest::for_team(&team.id);
    request.team_id = None;
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Personal projects cannot smuggle a team in
    let mut request = CreateProjectRequest::personal();
    request.team_id = Some(team.id.clone());
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_project_delete_any_status_removes_notes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let stranger = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    // Drive a project to in_progress and post a note on it
    let request = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &volunteer.access_token, &request)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/projects/{}/submit/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let decision = ProjectDecisionRequest {
        action: "approve".to_string(),
    };
    server
        .post_auth(
            &format!("/api/projects/{}/approve/", project.id),
            &admin.access_token,
            &decision,
        )
        .await
        .unwrap();
    server
        .post_auth(
            &format!("/api/projects/{}/start/", project.id),
            &volunteer.access_token,
            &(),
        )
        .await
        .unwrap();
    let note = CreateProjectUpdateRequest::sample();
    server
        .post_auth(
            &format!("/api/projects/{}/updates/", project.id),
            &volunteer.access_token,
            &note,
        )
        .await
        .unwrap();

    // Only the creator may delete it
    let response = server
        .delete_auth(&format!("/api/projects/{}/", project.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // In-progress status is no obstacle, and the notes go with it
    let response = server
        .delete_auth(&format!("/api/projects/{}/", project.id), &volunteer.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/projects/{}/", project.id), &volunteer.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_team_stats_and_member_hours() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &volunteer.access_token).await;

    // One approved, one pending
    let approved = create_work_log(&server, &volunteer.access_token).await;
    create_work_log(&server, &volunteer.access_token).await;

    let decide = DecideWorkLogRequest {
        status: "approved".to_string(),
    };
    server
        .post_auth(
            &format!("/api/volunteers/work-logs/{}/approve/", approved.id),
            &admin.access_token,
            &decide,
        )
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/teams/{}/stats/", team.id), &volunteer.access_token)
        .await
        .unwrap();
    let stats: TeamStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!((stats.total_hours - approved.hours_worked).abs() < f64::EPSILON);
    assert_eq!(stats.pending_count, 1);
    assert_eq!(stats.member_count, 1);
    assert_eq!(stats.project_count, 0);
    assert_eq!(stats.active_project_count, 0);

    let response = server
        .get_auth(
            &format!("/api/teams/{}/member-hours/", team.id),
            &volunteer.access_token,
        )
        .await
        .unwrap();
    let hours: MemberHoursListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(hours.member_hours.len(), 1);
    assert_eq!(hours.member_hours[0].user_id, volunteer.user.id);
    assert!((hours.member_hours[0].total_hours - approved.hours_worked).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_team_stats_members_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let stranger = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    let response = server
        .get_auth(&format!("/api/teams/{}/stats/", team.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Team-scoped View Tests
// ============================================================================

#[tokio::test]
async fn test_team_work_logs_and_projects_views() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let teammate = register(&server).await;
    let stranger = register(&server).await;
    let admin = register_admin(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    server
        .post_auth(&format!("/api/teams/{}/join/", team.id), &teammate.access_token, &())
        .await
        .unwrap();

    let log = create_work_log(&server, &leader.access_token).await;
    let project_req = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/", &leader.access_token, &project_req)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Members see the team's logs and projects
    let response = server
        .get_auth(
            &format!("/api/teams/{}/work-logs/", team.id),
            &teammate.access_token,
        )
        .await
        .unwrap();
    let logs: WorkLogListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs.work_logs.iter().any(|l| l.id == log.id));

    let response = server
        .get_auth(
            &format!("/api/teams/{}/projects/", team.id),
            &teammate.access_token,
        )
        .await
        .unwrap();
    let projects: ProjectListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(projects.projects.iter().any(|p| p.id == project.id));

    // So do admins
    let response = server
        .get_auth(&format!("/api/teams/{}/work-logs/", team.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Outsiders do not
    let response = server
        .get_auth(
            &format!("/api/teams/{}/work-logs/", team.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/teams/{}/projects/", team.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_verb_suffixed_route_aliases() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let member = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    // Work log creation through the verb-suffixed path
    let request = CreateWorkLogRequest::sample();
    let response = server
        .post_auth("/api/volunteers/work-logs/create/", &leader.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Project creation and deletion likewise
    let project_req = CreateProjectRequest::for_team(&team.id);
    let response = server
        .post_auth("/api/projects/create/", &leader.access_token, &project_req)
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/projects/{}/delete/", project.id),
            &leader.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Membership managed through the add-member and remove-member paths
    let request = AddMemberRequest {
        user_id: member.user.id.clone(),
    };
    let response = server
        .post_auth(
            &format!("/api/teams/{}/add-member/", team.id),
            &leader.access_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/teams/{}/remove-member/", team.id),
            &leader.access_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Document Tests
// ============================================================================

#[tokio::test]
async fn test_upload_document_requires_drive_link() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let mut request = UploadDocumentRequest::proposal();
    request.drive_link = "https://example.com/file.pdf".to_string();

    let response = server
        .post_auth("/api/documents/", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_document_sharing_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let mut request = UploadDocumentRequest::proposal();
    request.is_global = Some(true);

    let response = server
        .post_auth("/api/documents/", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_document_visibility() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let uploader = register(&server).await;
    let stranger = register(&server).await;
    let admin = register_admin(&server).await;

    let request = UploadDocumentRequest::proposal();
    let response = server
        .post_auth("/api/documents/", &uploader.access_token, &request)
        .await
        .unwrap();
    let doc: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A stranger gets not-found, not a permission hint
    let response = server
        .get_auth(&format!("/api/documents/{}/", doc.id), &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Admins see everything
    let response = server
        .get_auth(&format!("/api/documents/{}/", doc.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A global admin document is visible to everyone
    let mut global_req = UploadDocumentRequest::proposal();
    global_req.is_global = Some(true);
    let response = server
        .post_auth("/api/documents/", &admin.access_token, &global_req)
        .await
        .unwrap();
    let global_doc: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(global_doc.is_global);

    let response = server
        .get_auth(
            &format!("/api/documents/{}/", global_doc.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_documents_served_under_volunteer_prefix() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = UploadDocumentRequest::proposal();
    let response = server
        .post_auth("/api/volunteers/documents/", &auth.access_token, &request)
        .await
        .unwrap();
    let doc: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/volunteers/documents/{}/", doc.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The short prefix answers too
    let response = server
        .get_auth(&format!("/api/documents/{}/", doc.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/volunteers/documents/{}/", doc.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_teammate_uploads_are_visible() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let leader = register(&server).await;
    let teammate = register(&server).await;
    let team = create_team(&server, &leader.access_token).await;

    server
        .post_auth(&format!("/api/teams/{}/join/", team.id), &teammate.access_token, &())
        .await
        .unwrap();

    let request = UploadDocumentRequest::proposal();
    let response = server
        .post_auth("/api/documents/", &leader.access_token, &request)
        .await
        .unwrap();
    let doc: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/documents/{}/", doc.id), &teammate.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Admin and Search Tests
// ============================================================================

#[tokio::test]
async fn test_admin_reports_forbidden_for_volunteers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    for path in [
        "/api/admin/work-logs/unassigned/",
        "/api/admin/projects/unassigned/",
        "/api/admin/volunteers/without-team/",
    ] {
        let response = server.get_auth(path, &auth.access_token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
}

#[tokio::test]
async fn test_volunteers_without_team_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let teamless = register(&server).await;
    let admin = register_admin(&server).await;

    let response = server
        .get_auth("/api/admin/volunteers/without-team/", &admin.access_token)
        .await
        .unwrap();
    let users: UserListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(users.users.iter().any(|u| u.id == teamless.user.id));
}

#[tokio::test]
async fn test_user_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Too-short query is rejected
    let response = server
        .get_auth("/api/users/search/?q=a", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Search by own username
    let response = server
        .get_auth(
            &format!("/api/users/search/?q={}", auth.user.username),
            &auth.access_token,
        )
        .await
        .unwrap();
    let users: UserListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(users.users.iter().any(|u| u.id == auth.user.id));
    assert!(users.users.iter().all(|u| u.role == "volunteer"));
    assert!(users.users.len() <= 10);
}
