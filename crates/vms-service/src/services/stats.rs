//! Team statistics service
//!
//! Dashboard numbers are assembled from independent sub-queries run
//! concurrently. A failed part degrades to its zero default instead of
//! failing the whole response.

use tracing::{instrument, warn};
use vms_core::policy::Actor;
use vms_core::{DomainError, Snowflake};

use crate::dto::{MemberHoursListResponse, MemberHoursResponse, TeamStatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Team statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Team dashboard: approved hours, pending count, project counts,
    /// member count
    #[instrument(skip(self))]
    pub async fn team_stats(
        &self,
        actor: &Actor,
        team_id: Snowflake,
    ) -> ServiceResult<TeamStatsResponse> {
        self.require_team_visible(actor, team_id).await?;

        let (total_hours, pending_count, project_count, active_project_count, member_count) = tokio::join!(
            self.ctx.work_log_repo().sum_approved_hours(team_id),
            self.ctx.work_log_repo().count_pending(team_id),
            self.ctx.project_repo().count_by_team(team_id),
            self.ctx.project_repo().count_active_by_team(team_id),
            self.ctx.team_repo().member_count(team_id),
        );

        Ok(TeamStatsResponse {
            total_hours: zero_on_error(total_hours, team_id, "total_hours"),
            pending_count: zero_on_error(pending_count, team_id, "pending_count"),
            project_count: zero_on_error(project_count, team_id, "project_count"),
            active_project_count: zero_on_error(active_project_count, team_id, "active_project_count"),
            member_count: zero_on_error(member_count, team_id, "member_count"),
        })
    }

    /// Per-member approved hours, sorted descending
    #[instrument(skip(self))]
    pub async fn member_hours(
        &self,
        actor: &Actor,
        team_id: Snowflake,
    ) -> ServiceResult<MemberHoursListResponse> {
        self.require_team_visible(actor, team_id).await?;

        let rows = self.ctx.work_log_repo().member_hours(team_id).await?;

        Ok(MemberHoursListResponse {
            member_hours: rows.into_iter().map(MemberHoursResponse::from).collect(),
        })
    }

    /// Team stats are for admins and the team's own members
    async fn require_team_visible(&self, actor: &Actor, team_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        if actor.is_admin() {
            return Ok(());
        }
        self.ctx
            .team_repo()
            .find_member(team_id, actor.id)
            .await?
            .ok_or(DomainError::NotTeamMember)?;
        Ok(())
    }
}

/// One failed sub-query degrades to its zero default
fn zero_on_error<T: Default>(
    result: Result<T, DomainError>,
    team_id: Snowflake,
    part: &'static str,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(team_id = %team_id, part, error = %e, "Stats sub-query failed, using default");
            T::default()
        }
    }
}
