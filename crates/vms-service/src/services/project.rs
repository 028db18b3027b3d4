//! Project service
//!
//! Projects move through a fixed lifecycle: draft, submitted, then either
//! approved (and on to in_progress, completed) or rejected. Review belongs
//! to admins, everything else to the creator.

use tracing::{info, instrument};
use vms_core::entities::{Project, ProjectAction, ProjectStatus, ProjectUpdate};
use vms_core::policy::{authorize, Action, Actor};
use vms_core::{DomainError, Snowflake};

use crate::dto::{
    CreateProjectRequest, CreateProjectUpdateRequest, ProjectDecisionRequest, ProjectListResponse,
    ProjectResponse, ProjectUpdateListResponse, ProjectUpdateResponse, UpdateProjectRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Project service
pub struct ProjectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProjectService<'a> {
    /// Create a new ProjectService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a draft project; personal by default, or for a team the
    /// volunteer belongs to
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateProjectRequest,
    ) -> ServiceResult<ProjectResponse> {
        authorize(actor, Action::CreateProject)?;

        let team_id = match (request.is_team_project, request.team_id) {
            (false, None) => None,
            (false, Some(_)) => {
                return Err(ServiceError::validation(
                    "personal projects do not name a team",
                ))
            }
            (true, None) => {
                return Err(ServiceError::validation(
                    "team projects require a team_id",
                ))
            }
            (true, Some(team_id)) => {
                let team = self
                    .ctx
                    .team_repo()
                    .find_by_id(team_id)
                    .await?
                    .ok_or(DomainError::TeamNotFound(team_id))?;

                self.ctx
                    .team_repo()
                    .find_member(team.id, actor.id)
                    .await?
                    .ok_or(DomainError::NotTeamMember)?;

                Some(team.id)
            }
        };

        let project = Project::new(
            self.ctx.generate_id(),
            team_id,
            request.is_team_project,
            actor.id,
            request.title,
            request.description,
        );
        self.ctx.project_repo().create(&project).await?;

        info!(project_id = %project.id, team_project = project.is_team_project, "Project created");

        Ok(ProjectResponse::from(&project))
    }

    /// List the caller's own projects plus their teams' projects;
    /// admins see all
    #[instrument(skip(self))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<ProjectListResponse> {
        let projects = if actor.is_admin() {
            self.ctx.project_repo().find_all().await?
        } else {
            let team_ids: Vec<Snowflake> = self
                .ctx
                .team_repo()
                .find_memberships(actor.id)
                .await?
                .into_iter()
                .map(|m| m.team_id)
                .collect();
            self.ctx.project_repo().find_visible(actor.id, &team_ids).await?
        };

        Ok(ProjectListResponse {
            projects: projects.iter().map(ProjectResponse::from).collect(),
        })
    }

    /// List one team's projects (admins and that team's members)
    #[instrument(skip(self))]
    pub async fn list_for_team(
        &self,
        actor: &Actor,
        team_id: Snowflake,
    ) -> ServiceResult<ProjectListResponse> {
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        if !actor.is_admin() {
            self.ctx
                .team_repo()
                .find_member(team_id, actor.id)
                .await?
                .ok_or(DomainError::NotTeamMember)?;
        }

        let projects = self.ctx.project_repo().find_by_teams(&[team_id]).await?;

        Ok(ProjectListResponse {
            projects: projects.iter().map(ProjectResponse::from).collect(),
        })
    }

    /// Get a single project the caller is allowed to see
    #[instrument(skip(self))]
    pub async fn get(&self, actor: &Actor, project_id: Snowflake) -> ServiceResult<ProjectResponse> {
        let project = self.find_visible(actor, project_id).await?;
        Ok(ProjectResponse::from(&project))
    }

    /// Edit a draft (creator only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        project_id: Snowflake,
        request: UpdateProjectRequest,
    ) -> ServiceResult<ProjectResponse> {
        let mut project = self
            .ctx
            .project_repo()
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(project_id))?;

        authorize(actor, Action::ModifyProject(&project))?;
        if !project.is_editable() {
            return Err(DomainError::ProjectNotEditable.into());
        }

        if let Some(title) = request.title {
            project.title = title;
        }
        if let Some(description) = request.description {
            project.description = description;
        }

        self.ctx.project_repo().update(&project).await?;

        Ok(ProjectResponse::from(&project))
    }

    /// Delete a project at any status (creator only). Progress notes
    /// go with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, project_id: Snowflake) -> ServiceResult<()> {
        let project = self
            .ctx
            .project_repo()
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(project_id))?;

        authorize(actor, Action::ModifyProject(&project))?;

        self.ctx.project_repo().delete(project_id).await?;

        info!(project_id = %project_id, "Project deleted");
        Ok(())
    }

    /// Creator-driven lifecycle step: submit, start, or complete
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        actor: &Actor,
        project_id: Snowflake,
        action: ProjectAction,
    ) -> ServiceResult<ProjectResponse> {
        let mut project = self
            .ctx
            .project_repo()
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(project_id))?;

        authorize(actor, Action::TransitionProject { project: &project, action })?;
        project.transition(action)?;
        self.ctx.project_repo().update(&project).await?;

        info!(project_id = %project_id, status = project.status.as_str(), "Project transitioned");

        Ok(ProjectResponse::from(&project))
    }

    /// Admin review of a submitted project
    #[instrument(skip(self, request))]
    pub async fn decide(
        &self,
        actor: &Actor,
        project_id: Snowflake,
        request: ProjectDecisionRequest,
    ) -> ServiceResult<ProjectResponse> {
        let action = match request.action.as_str() {
            "approve" => ProjectAction::Approve,
            "reject" => ProjectAction::Reject,
            _ => {
                return Err(ServiceError::validation(
                    "action must be \"approve\" or \"reject\"",
                ))
            }
        };

        self.transition(actor, project_id, action).await
    }

    /// Post a progress note to an approved or in-progress project
    /// (creator only)
    #[instrument(skip(self, request))]
    pub async fn post_update(
        &self,
        actor: &Actor,
        project_id: Snowflake,
        request: CreateProjectUpdateRequest,
    ) -> ServiceResult<ProjectUpdateResponse> {
        let project = self
            .ctx
            .project_repo()
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(project_id))?;

        authorize(actor, Action::PostProjectUpdate(&project))?;

        if !matches!(
            project.status,
            ProjectStatus::Approved | ProjectStatus::InProgress
        ) {
            return Err(ServiceError::conflict(
                "Updates can only be posted to an approved or in-progress project",
            ));
        }

        let update = ProjectUpdate::new(
            self.ctx.generate_id(),
            project.id,
            actor.id,
            request.title,
            request.description,
        );
        self.ctx.project_repo().add_update(&update).await?;

        info!(project_id = %project_id, update_id = %update.id, "Project update posted");

        Ok(ProjectUpdateResponse::from(&update))
    }

    /// List a project's progress notes
    #[instrument(skip(self))]
    pub async fn list_updates(
        &self,
        actor: &Actor,
        project_id: Snowflake,
    ) -> ServiceResult<ProjectUpdateListResponse> {
        let project = self.find_visible(actor, project_id).await?;

        let updates = self.ctx.project_repo().find_updates(project.id).await?;

        Ok(ProjectUpdateListResponse {
            updates: updates.iter().map(ProjectUpdateResponse::from).collect(),
        })
    }

    async fn find_visible(&self, actor: &Actor, project_id: Snowflake) -> ServiceResult<Project> {
        let project = self
            .ctx
            .project_repo()
            .find_by_id(project_id)
            .await?
            .ok_or(DomainError::ProjectNotFound(project_id))?;

        if actor.is_admin() || project.is_creator(actor.id) {
            return Ok(project);
        }

        // Team projects are visible to their team; personal projects
        // stay between the creator and admins
        if project.is_team_project {
            if let Some(team_id) = project.team_id {
                let membership = self.ctx.team_repo().find_member(team_id, actor.id).await?;
                if membership.is_some() {
                    return Ok(project);
                }
            }
        }
        Err(DomainError::ProjectNotFound(project_id).into())
    }
}
