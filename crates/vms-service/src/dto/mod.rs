//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AddMemberRequest, BatchApproveRequest, CreateProjectRequest, CreateProjectUpdateRequest,
    CreateTeamRequest, CreateWorkLogRequest, DecideWorkLogRequest, LoginRequest, LogoutRequest,
    ProjectDecisionRequest, RefreshTokenRequest, RegisterRequest, UpdateProjectRequest,
    UpdateTeamRequest, UpdateWorkLogRequest, UploadDocumentRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, BatchApproveResponse, BatchItemResult, CurrentUserResponse, DocumentListResponse,
    DocumentResponse, HealthResponse, MemberHoursListResponse, MemberHoursResponse,
    MemberListResponse, MemberResponse, ProjectListResponse, ProjectResponse,
    ProjectUpdateListResponse, ProjectUpdateResponse, ReadinessResponse, SuccessResponse,
    TeamListResponse, TeamResponse, TeamStatsResponse, UserListResponse, UserResponse,
    WorkLogListResponse, WorkLogResponse,
};
