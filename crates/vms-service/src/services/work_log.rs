//! Work log service
//!
//! Volunteers report hours; admins approve or reject them. Approved and
//! rejected logs are terminal.

use std::collections::HashSet;

use tracing::{info, instrument};
use vms_core::entities::{ApprovalStatus, WorkLog};
use vms_core::policy::{authorize, Action, Actor};
use vms_core::{DomainError, Snowflake};

use crate::dto::{
    BatchApproveRequest, BatchApproveResponse, BatchItemResult, CreateWorkLogRequest,
    DecideWorkLogRequest, UpdateWorkLogRequest, WorkLogListResponse, WorkLogResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Work log service
pub struct WorkLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkLogService<'a> {
    /// Create a new WorkLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Report hours. The team is derived from the volunteer's current
    /// membership; a volunteer without one logs hours team-less.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateWorkLogRequest,
    ) -> ServiceResult<WorkLogResponse> {
        authorize(actor, Action::CreateWorkLog)?;
        WorkLog::validate_hours(request.hours_worked)?;

        let team_id = self
            .ctx
            .team_repo()
            .find_memberships(actor.id)
            .await?
            .first()
            .map(|m| m.team_id);

        let log = WorkLog::new(
            self.ctx.generate_id(),
            actor.id,
            team_id,
            request.date,
            request.hours_worked,
            request.description,
        );
        self.ctx.work_log_repo().create(&log).await?;

        info!(log_id = %log.id, "Work log created");

        Ok(WorkLogResponse::from(&log))
    }

    /// List one team's logs (admins and that team's members)
    #[instrument(skip(self))]
    pub async fn list_for_team(
        &self,
        actor: &Actor,
        team_id: Snowflake,
    ) -> ServiceResult<WorkLogListResponse> {
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

        let logs = self.ctx.work_log_repo().find_by_teams(&[team_id]).await?;

        Ok(WorkLogListResponse {
            work_logs: logs.iter().map(WorkLogResponse::from).collect(),
        })
    }

    /// List logs visible to the caller: own logs, plus team logs for
    /// leaders, everything for admins
    #[instrument(skip(self))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<WorkLogListResponse> {
        if actor.is_admin() {
            let logs = self.ctx.work_log_repo().find_all().await?;
            return Ok(WorkLogListResponse {
                work_logs: logs.iter().map(WorkLogResponse::from).collect(),
            });
        }

        let mut logs = self.ctx.work_log_repo().find_by_volunteer(actor.id).await?;

        let led_teams: Vec<Snowflake> = self
            .ctx
            .team_repo()
            .find_memberships(actor.id)
            .await?
            .into_iter()
            .filter(|m| m.is_leader())
            .map(|m| m.team_id)
            .collect();

        if !led_teams.is_empty() {
            let mut seen: HashSet<Snowflake> = logs.iter().map(|l| l.id).collect();
            for log in self.ctx.work_log_repo().find_by_teams(&led_teams).await? {
                if seen.insert(log.id) {
                    logs.push(log);
                }
            }
            logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        }

        Ok(WorkLogListResponse {
            work_logs: logs.iter().map(WorkLogResponse::from).collect(),
        })
    }

    /// Get a single log the caller is allowed to see
    #[instrument(skip(self))]
    pub async fn get(&self, actor: &Actor, log_id: Snowflake) -> ServiceResult<WorkLogResponse> {
        let log = self.find_visible(actor, log_id).await?;
        Ok(WorkLogResponse::from(&log))
    }

    /// Edit an own pending log
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        log_id: Snowflake,
        request: UpdateWorkLogRequest,
    ) -> ServiceResult<WorkLogResponse> {
        let mut log = self
            .ctx
            .work_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or(DomainError::WorkLogNotFound(log_id))?;

        authorize(actor, Action::ModifyWorkLog(&log))?;
        if !log.is_pending() {
            return Err(DomainError::WorkLogNotEditable.into());
        }

        if let Some(hours) = request.hours_worked {
            WorkLog::validate_hours(hours)?;
            log.hours = hours;
        }
        if let Some(date) = request.date {
            log.date = date;
        }
        if let Some(description) = request.description {
            log.description = description;
        }

        self.ctx.work_log_repo().update(&log).await?;

        Ok(WorkLogResponse::from(&log))
    }

    /// Delete an own pending log
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, log_id: Snowflake) -> ServiceResult<()> {
        let log = self
            .ctx
            .work_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or(DomainError::WorkLogNotFound(log_id))?;

        authorize(actor, Action::ModifyWorkLog(&log))?;
        if !log.is_pending() {
            return Err(DomainError::WorkLogNotEditable.into());
        }

        self.ctx.work_log_repo().delete(log_id).await?;

        info!(log_id = %log_id, "Work log deleted");
        Ok(())
    }

    /// Approve or reject a pending log (admins only)
    #[instrument(skip(self, request))]
    pub async fn decide(
        &self,
        actor: &Actor,
        log_id: Snowflake,
        request: DecideWorkLogRequest,
    ) -> ServiceResult<WorkLogResponse> {
        authorize(actor, Action::DecideWorkLog)?;
        let status = parse_decision(&request.status)?;

        let mut log = self
            .ctx
            .work_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or(DomainError::WorkLogNotFound(log_id))?;

        log.decide(status, actor.id)?;
        self.ctx.work_log_repo().update(&log).await?;

        info!(log_id = %log_id, status = status.as_str(), "Work log decided");

        Ok(WorkLogResponse::from(&log))
    }

    /// Decide a batch of logs for one team. Items fail individually;
    /// one bad id never sinks the rest.
    #[instrument(skip(self, request), fields(count = request.log_ids.len()))]
    pub async fn batch_approve(
        &self,
        actor: &Actor,
        team_id: Snowflake,
        request: BatchApproveRequest,
    ) -> ServiceResult<BatchApproveResponse> {
        authorize(actor, Action::DecideWorkLog)?;
        let status = parse_decision(&request.status)?;

        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or(DomainError::TeamNotFound(team_id))?;

        let mut results = Vec::with_capacity(request.log_ids.len());
        let mut approved_count = 0;

        for log_id in request.log_ids {
            let outcome = self.decide_one(actor, team_id, log_id, status).await;
            match outcome {
                Ok(()) => {
                    approved_count += 1;
                    results.push(BatchItemResult {
                        id: log_id.to_string(),
                        ok: true,
                        error: None,
                    });
                }
                Err(e) => results.push(BatchItemResult {
                    id: log_id.to_string(),
                    ok: false,
                    error: Some(e.to_string()),
                }),
            }
        }

        info!(team_id = %team_id, approved_count, "Batch decision processed");

        Ok(BatchApproveResponse {
            results,
            approved_count,
        })
    }

    async fn decide_one(
        &self,
        actor: &Actor,
        team_id: Snowflake,
        log_id: Snowflake,
        status: ApprovalStatus,
    ) -> ServiceResult<()> {
        let mut log = self
            .ctx
            .work_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or(DomainError::WorkLogNotFound(log_id))?;

        if log.team_id != Some(team_id) {
            return Err(ServiceError::validation(format!(
                "work log {log_id} does not belong to team {team_id}"
            )));
        }

        log.decide(status, actor.id)?;
        self.ctx.work_log_repo().update(&log).await?;
        Ok(())
    }

    async fn find_visible(&self, actor: &Actor, log_id: Snowflake) -> ServiceResult<WorkLog> {
        let log = self
            .ctx
            .work_log_repo()
            .find_by_id(log_id)
            .await?
            .ok_or(DomainError::WorkLogNotFound(log_id))?;

        if actor.is_admin() || log.is_owner(actor.id) {
            return Ok(log);
        }

        // Team leaders see their teams' logs
        if let Some(team_id) = log.team_id {
            let membership = self.ctx.team_repo().find_member(team_id, actor.id).await?;
            if matches!(membership, Some(m) if m.is_leader()) {
                return Ok(log);
            }
        }
        // Not-found rather than a permission hint for everyone else
        Err(DomainError::WorkLogNotFound(log_id).into())
    }
}

fn parse_decision(status: &str) -> ServiceResult<ApprovalStatus> {
    match ApprovalStatus::parse(status) {
        Some(s) if s.is_terminal() => Ok(s),
        _ => Err(ServiceError::validation(
            "status must be \"approved\" or \"rejected\"",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decision() {
        assert_eq!(parse_decision("approved").unwrap(), ApprovalStatus::Approved);
        assert_eq!(parse_decision("rejected").unwrap(), ApprovalStatus::Rejected);
        assert!(parse_decision("pending").is_err());
        assert!(parse_decision("banana").is_err());
    }
}
