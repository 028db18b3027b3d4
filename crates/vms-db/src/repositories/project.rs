//! PostgreSQL implementation of ProjectRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vms_core::entities::{Project, ProjectUpdate};
use vms_core::traits::{ProjectRepository, RepoResult};
use vms_core::value_objects::Snowflake;

use crate::models::{ProjectModel, ProjectUpdateModel};

use super::error::{map_db_error, project_not_found};

const PROJECT_COLUMNS: &str = "id, team_id, is_team_project, created_by, title, description, \
     status, start_date, end_date, created_at, updated_at";

/// PostgreSQL implementation of ProjectRepository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    /// Create a new PgProjectRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Project>> {
        let result = sqlx::query_as::<_, ProjectModel>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Project::from))
    }

    #[instrument(skip(self))]
    async fn find_by_teams(&self, team_ids: &[Snowflake]) -> RepoResult<Vec<Project>> {
        let ids: Vec<i64> = team_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, ProjectModel>(&format!(
            r"
            SELECT {PROJECT_COLUMNS} FROM projects
            WHERE team_id = ANY($1)
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_visible(
        &self,
        user_id: Snowflake,
        team_ids: &[Snowflake],
    ) -> RepoResult<Vec<Project>> {
        let ids: Vec<i64> = team_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, ProjectModel>(&format!(
            r"
            SELECT {PROJECT_COLUMNS} FROM projects
            WHERE created_by = $1 OR (is_team_project AND team_id = ANY($2))
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(user_id.into_inner())
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Project>> {
        let results = sqlx::query_as::<_, ProjectModel>(&format!(
            r"
            SELECT {PROJECT_COLUMNS} FROM projects
            ORDER BY created_at DESC, id DESC
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_unassigned(&self) -> RepoResult<Vec<Project>> {
        // Personal projects never had a team; only a dangling team
        // reference counts as unassigned.
        let results = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT p.id, p.team_id, p.is_team_project, p.created_by, p.title, p.description,
                   p.status, p.start_date, p.end_date, p.created_at, p.updated_at
            FROM projects p
            LEFT JOIN teams t ON t.id = p.team_id AND t.deleted_at IS NULL
            WHERE p.team_id IS NOT NULL AND t.id IS NULL
            ORDER BY p.created_at DESC, p.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, project: &Project) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO projects (id, team_id, is_team_project, created_by, title, description,
                                  status, start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(project.id.into_inner())
        .bind(project.team_id.map(Snowflake::into_inner))
        .bind(project.is_team_project)
        .bind(project.created_by.into_inner())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, project: &Project) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE projects
            SET title = $2, description = $3, status = $4, start_date = $5,
                end_date = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(project.id.into_inner())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.start_date)
        .bind(project.end_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(project.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM projects WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_team(&self, team_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM projects WHERE team_id = $1
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_active_by_team(&self, team_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM projects WHERE team_id = $1 AND status = 'in_progress'
            ",
        )
        .bind(team_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn add_update(&self, update: &ProjectUpdate) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO project_updates (id, project_id, author_id, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(update.id.into_inner())
        .bind(update.project_id.into_inner())
        .bind(update.author_id.into_inner())
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_updates(&self, project_id: Snowflake) -> RepoResult<Vec<ProjectUpdate>> {
        let results = sqlx::query_as::<_, ProjectUpdateModel>(
            r"
            SELECT id, project_id, author_id, title, description, created_at
            FROM project_updates
            WHERE project_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(project_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProjectUpdate::from).collect())
    }
}
