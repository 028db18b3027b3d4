//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vms_core::entities::{Team, TeamMember};
use vms_core::error::DomainError;
use vms_core::traits::{RepoResult, TeamRepository};
use vms_core::value_objects::Snowflake;

use crate::models::{TeamMemberModel, TeamModel};

use super::error::{map_db_error, map_unique_violation, member_not_found, team_not_found};

const TEAM_COLUMNS: &str = "id, name, description, created_by, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE name = $1 AND deleted_at IS NULL"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Team>> {
        let results = sqlx::query_as::<_, TeamModel>(&format!(
            r"
            SELECT {TEAM_COLUMNS} FROM teams
            WHERE deleted_at IS NULL
            ORDER BY name
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Team::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Team>> {
        let results = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT t.id, t.name, t.description, t.created_by, t.created_at, t.updated_at,
                   t.deleted_at
            FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            WHERE tm.user_id = $1 AND t.deleted_at IS NULL
            ORDER BY tm.joined_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Team::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, team: &Team) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO teams (id, name, description, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(team.id.into_inner())
        .bind(&team.name)
        .bind(&team.description)
        .bind(team.created_by.into_inner())
        .bind(team.created_at)
        .bind(team.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, team: &Team) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teams
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(team.id.into_inner())
        .bind(&team.name)
        .bind(&team.description)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamNameExists))?;

        if result.rows_affected() == 0 {
            return Err(team_not_found(team.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teams
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(team_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, team_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM team_members WHERE team_id = $1
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_member(
        &self,
        team_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<TeamMember>> {
        let result = sqlx::query_as::<_, TeamMemberModel>(
            r"
            SELECT team_id, user_id, role, joined_at
            FROM team_members
            WHERE team_id = $1 AND user_id = $2
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TeamMember::from))
    }

    #[instrument(skip(self))]
    async fn find_members(&self, team_id: Snowflake) -> RepoResult<Vec<TeamMember>> {
        let results = sqlx::query_as::<_, TeamMemberModel>(
            r"
            SELECT team_id, user_id, role, joined_at
            FROM team_members
            WHERE team_id = $1
            ORDER BY joined_at
            ",
        )
        .bind(team_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TeamMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_memberships(&self, user_id: Snowflake) -> RepoResult<Vec<TeamMember>> {
        let results = sqlx::query_as::<_, TeamMemberModel>(
            r"
            SELECT tm.team_id, tm.user_id, tm.role, tm.joined_at
            FROM team_members tm
            JOIN teams t ON t.id = tm.team_id
            WHERE tm.user_id = $1 AND t.deleted_at IS NULL
            ORDER BY tm.joined_at
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TeamMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn add_member(&self, member: &TeamMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO team_members (team_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(member.team_id.into_inner())
        .bind(member.user_id.into_inner())
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_member(&self, team_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM team_members WHERE team_id = $1 AND user_id = $2
            ",
        )
        .bind(team_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found());
        }

        Ok(())
    }
}
