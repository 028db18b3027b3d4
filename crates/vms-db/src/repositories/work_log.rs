//! PostgreSQL implementation of WorkLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vms_core::entities::WorkLog;
use vms_core::traits::{MemberHours, RepoResult, WorkLogRepository};
use vms_core::value_objects::Snowflake;

use crate::models::{MemberHoursModel, WorkLogModel};

use super::error::{map_db_error, work_log_not_found};

const WORK_LOG_COLUMNS: &str = "id, volunteer_id, team_id, date, hours, description, \
     status, reviewed_by, reviewed_at, created_at, updated_at";

/// PostgreSQL implementation of WorkLogRepository
#[derive(Clone)]
pub struct PgWorkLogRepository {
    pool: PgPool,
}

impl PgWorkLogRepository {
    /// Create a new PgWorkLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkLogRepository for PgWorkLogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<WorkLog>> {
        let result = sqlx::query_as::<_, WorkLogModel>(&format!(
            "SELECT {WORK_LOG_COLUMNS} FROM work_logs WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(WorkLog::from))
    }

    #[instrument(skip(self))]
    async fn find_by_volunteer(&self, volunteer_id: Snowflake) -> RepoResult<Vec<WorkLog>> {
        let results = sqlx::query_as::<_, WorkLogModel>(&format!(
            r"
            SELECT {WORK_LOG_COLUMNS} FROM work_logs
            WHERE volunteer_id = $1
            ORDER BY date DESC, id DESC
            "
        ))
        .bind(volunteer_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WorkLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_teams(&self, team_ids: &[Snowflake]) -> RepoResult<Vec<WorkLog>> {
        let ids: Vec<i64> = team_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, WorkLogModel>(&format!(
            r"
            SELECT {WORK_LOG_COLUMNS} FROM work_logs
            WHERE team_id = ANY($1)
            ORDER BY date DESC, id DESC
            "
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WorkLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<WorkLog>> {
        let results = sqlx::query_as::<_, WorkLogModel>(&format!(
            r"
            SELECT {WORK_LOG_COLUMNS} FROM work_logs
            ORDER BY date DESC, id DESC
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WorkLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_unassigned(&self) -> RepoResult<Vec<WorkLog>> {
        // Covers logs with no team at all and logs whose team was deleted
        let results = sqlx::query_as::<_, WorkLogModel>(
            r"
            SELECT w.id, w.volunteer_id, w.team_id, w.date, w.hours, w.description,
                   w.status, w.reviewed_by, w.reviewed_at, w.created_at, w.updated_at
            FROM work_logs w
            LEFT JOIN teams t ON t.id = w.team_id AND t.deleted_at IS NULL
            WHERE t.id IS NULL
            ORDER BY w.date DESC, w.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WorkLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, log: &WorkLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO work_logs (id, volunteer_id, team_id, date, hours, description,
                                   status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.volunteer_id.into_inner())
        .bind(log.team_id.map(Snowflake::into_inner))
        .bind(log.date)
        .bind(log.hours)
        .bind(&log.description)
        .bind(log.status.as_str())
        .bind(log.created_at)
        .bind(log.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, log: &WorkLog) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE work_logs
            SET date = $2, hours = $3, description = $4, status = $5,
                reviewed_by = $6, reviewed_at = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.date)
        .bind(log.hours)
        .bind(&log.description)
        .bind(log.status.as_str())
        .bind(log.reviewed_by.map(Snowflake::into_inner))
        .bind(log.reviewed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(work_log_not_found(log.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM work_logs WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(work_log_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn sum_approved_hours(&self, team_id: Snowflake) -> RepoResult<f64> {
        let result = sqlx::query_scalar::<_, f64>(
            r"
            SELECT COALESCE(SUM(hours), 0)::double precision
            FROM work_logs
            WHERE team_id = $1 AND status = 'approved'
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_pending(&self, team_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM work_logs WHERE team_id = $1 AND status = 'pending'
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn member_hours(&self, team_id: Snowflake) -> RepoResult<Vec<MemberHours>> {
        let results = sqlx::query_as::<_, MemberHoursModel>(
            r"
            SELECT u.id AS user_id, u.username, u.first_name, u.last_name,
                   COALESCE(SUM(w.hours) FILTER (WHERE w.status = 'approved'), 0)::double precision
                       AS total_hours
            FROM team_members tm
            JOIN users u ON u.id = tm.user_id AND u.deleted_at IS NULL
            LEFT JOIN work_logs w ON w.volunteer_id = u.id AND w.team_id = tm.team_id
            WHERE tm.team_id = $1
            GROUP BY u.id, u.username, u.first_name, u.last_name
            ORDER BY total_hours DESC, u.username
            ",
        )
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemberHours::from).collect())
    }
}
