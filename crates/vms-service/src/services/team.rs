//! Team service
//!
//! Team creation, membership management, and the guarded team delete.
//! The creator becomes the team's leader; the leader cannot be removed.

use tracing::{info, instrument};
use vms_core::entities::{Team, TeamMember};
use vms_core::policy::{authorize, Action, Actor};
use vms_core::{DomainError, Snowflake};

use crate::dto::{
    AddMemberRequest, CreateTeamRequest, MemberListResponse, MemberResponse, TeamListResponse,
    TeamResponse, UpdateTeamRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team; the creator joins as leader
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateTeamRequest,
    ) -> ServiceResult<TeamResponse> {
        authorize(actor, Action::CreateTeam)?;

        if self
            .ctx
            .team_repo()
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(DomainError::TeamNameExists.into());
        }

        let mut team = Team::new(self.ctx.generate_id(), request.name, actor.id);
        team.set_description(request.description);
        self.ctx.team_repo().create(&team).await?;

        let leader = TeamMember::leader(team.id, actor.id);
        self.ctx.team_repo().add_member(&leader).await?;

        info!(team_id = %team.id, leader_id = %actor.id, "Team created");

        Ok(TeamResponse::from(&team))
    }

    /// List teams the caller belongs to; admins see all
    #[instrument(skip(self))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<TeamListResponse> {
        let teams = if actor.is_admin() {
            self.ctx.team_repo().find_all().await?
        } else {
            self.ctx.team_repo().find_by_user(actor.id).await?
        };

        Ok(TeamListResponse {
            teams: teams.iter().map(TeamResponse::from).collect(),
        })
    }

    /// Get a single team
    #[instrument(skip(self))]
    pub async fn get(&self, team_id: Snowflake) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        Ok(TeamResponse::from(&team))
    }

    /// Update a team's name or description (leader or admin)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        team_id: Snowflake,
        request: UpdateTeamRequest,
    ) -> ServiceResult<TeamResponse> {
        let mut team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        let membership = self.ctx.team_repo().find_member(team_id, actor.id).await?;
        authorize(actor, Action::ManageMembers { membership: membership.as_ref() })?;

        if let Some(name) = request.name {
            if name != team.name
                && self.ctx.team_repo().find_by_name(&name).await?.is_some()
            {
                return Err(DomainError::TeamNameExists.into());
            }
            team.name = name;
        }
        if let Some(description) = request.description {
            team.set_description(Some(description));
        }

        self.ctx.team_repo().update(&team).await?;

        Ok(TeamResponse::from(&team))
    }

    /// Join a team as a plain member (volunteers only)
    #[instrument(skip(self))]
    pub async fn join(&self, actor: &Actor, team_id: Snowflake) -> ServiceResult<()> {
        authorize(actor, Action::JoinTeam)?;

        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        if self
            .ctx
            .team_repo()
            .find_member(team.id, actor.id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyMember.into());
        }

        let member = TeamMember::new(team.id, actor.id);
        self.ctx.team_repo().add_member(&member).await?;

        info!(team_id = %team_id, user_id = %actor.id, "Joined team");
        Ok(())
    }

    /// Add a volunteer to a team (leader or admin)
    #[instrument(skip(self, request))]
    pub async fn add_member(
        &self,
        actor: &Actor,
        team_id: Snowflake,
        request: AddMemberRequest,
    ) -> ServiceResult<()> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        let membership = self.ctx.team_repo().find_member(team.id, actor.id).await?;
        authorize(actor, Action::ManageMembers { membership: membership.as_ref() })?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.user_id))?;
        if !user.is_volunteer() {
            return Err(DomainError::VolunteerOnly.into());
        }

        if self
            .ctx
            .team_repo()
            .find_member(team.id, user.id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyMember.into());
        }

        let member = TeamMember::new(team.id, user.id);
        self.ctx.team_repo().add_member(&member).await?;

        info!(team_id = %team_id, user_id = %user.id, "Member added");
        Ok(())
    }

    /// Remove a member (leader or admin); the leader cannot be removed
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        actor: &Actor,
        team_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        let membership = self.ctx.team_repo().find_member(team_id, actor.id).await?;
        authorize(actor, Action::ManageMembers { membership: membership.as_ref() })?;

        let target = self
            .ctx
            .team_repo()
            .find_member(team_id, user_id)
            .await?
            .ok_or(DomainError::MemberNotFound)?;
        if target.is_leader() {
            return Err(DomainError::CannotRemoveLeader.into());
        }

        self.ctx.team_repo().remove_member(team_id, user_id).await?;

        info!(team_id = %team_id, user_id = %user_id, "Member removed");
        Ok(())
    }

    /// Delete a team (creator or admin); blocked while projects exist
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, team_id: Snowflake) -> ServiceResult<()> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        authorize(actor, Action::DeleteTeam(&team))?;

        let project_count = self.ctx.project_repo().count_by_team(team.id).await?;
        if project_count > 0 {
            return Err(DomainError::TeamHasProjects.into());
        }

        self.ctx.team_repo().delete(team.id).await?;

        info!(team_id = %team_id, "Team deleted");
        Ok(())
    }

    /// List a team's members with profile fields
    #[instrument(skip(self))]
    pub async fn members(&self, team_id: Snowflake) -> ServiceResult<MemberListResponse> {
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        let memberships = self.ctx.team_repo().find_members(team_id).await?;

        let mut members = Vec::with_capacity(memberships.len());
        for membership in memberships {
            let Some(user) = self.ctx.user_repo().find_by_id(membership.user_id).await? else {
                // Deleted accounts drop out of the listing
                continue;
            };
            members.push(MemberResponse {
                user_id: user.id.to_string(),
                username: user.username,
                first_name: user.first_name,
                last_name: user.last_name,
                role: membership.role.as_str().to_string(),
                joined_at: membership.joined_at,
            });
        }

        Ok(MemberListResponse { members })
    }
}
