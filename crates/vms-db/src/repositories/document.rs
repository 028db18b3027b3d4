//! PostgreSQL implementation of DocumentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vms_core::entities::Document;
use vms_core::traits::{DocumentRepository, RepoResult};
use vms_core::value_objects::Snowflake;

use crate::models::DocumentModel;

use super::error::{document_not_found, map_db_error};

// Shared team ids live in the document_teams junction table and are folded
// into a single array column per row.
const DOCUMENT_SELECT: &str = r"
    SELECT d.id, d.uploader_id, d.title, d.drive_link, d.doc_type, d.is_global,
           COALESCE(array_agg(dt.team_id) FILTER (WHERE dt.team_id IS NOT NULL), '{}')
               AS team_ids,
           d.created_at
    FROM documents d
    LEFT JOIN document_teams dt ON dt.document_id = d.id
";

const DOCUMENT_GROUP: &str = r"
    GROUP BY d.id, d.uploader_id, d.title, d.drive_link, d.doc_type, d.is_global, d.created_at
";

/// PostgreSQL implementation of DocumentRepository
#[derive(Clone)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    /// Create a new PgDocumentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Document>> {
        let result = sqlx::query_as::<_, DocumentModel>(&format!(
            "{DOCUMENT_SELECT} WHERE d.id = $1 {DOCUMENT_GROUP}"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Document::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Document>> {
        let results = sqlx::query_as::<_, DocumentModel>(&format!(
            "{DOCUMENT_SELECT} {DOCUMENT_GROUP} ORDER BY d.created_at DESC, d.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Document::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_visible(
        &self,
        user_id: Snowflake,
        team_ids: &[Snowflake],
    ) -> RepoResult<Vec<Document>> {
        let ids: Vec<i64> = team_ids.iter().map(|id| id.into_inner()).collect();

        // Visible: own uploads, global documents, documents shared with one of
        // the caller's teams, and uploads by anyone on those teams.
        let results = sqlx::query_as::<_, DocumentModel>(&format!(
            r"
            {DOCUMENT_SELECT}
            WHERE d.uploader_id = $1
               OR d.is_global
               OR EXISTS (
                   SELECT 1 FROM document_teams s
                   WHERE s.document_id = d.id AND s.team_id = ANY($2)
               )
               OR EXISTS (
                   SELECT 1 FROM team_members tm
                   WHERE tm.user_id = d.uploader_id AND tm.team_id = ANY($2)
               )
            {DOCUMENT_GROUP}
            ORDER BY d.created_at DESC, d.id DESC
            "
        ))
        .bind(user_id.into_inner())
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Document::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, document: &Document) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO documents (id, uploader_id, title, drive_link, doc_type,
                                   is_global, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(document.id.into_inner())
        .bind(document.uploader_id.into_inner())
        .bind(&document.title)
        .bind(&document.drive_link)
        .bind(document.doc_type.as_str())
        .bind(document.is_global)
        .bind(document.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for team_id in &document.team_ids {
            sqlx::query(
                r"
                INSERT INTO document_teams (document_id, team_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(document.id.into_inner())
            .bind(team_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM document_teams WHERE document_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM documents WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(document_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
