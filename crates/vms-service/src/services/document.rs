//! Document service
//!
//! Documents are links into Google Drive/Docs, never file uploads. Sharing
//! (global visibility, team shares) is an admin-only capability.

use tracing::{info, instrument};
use vms_core::entities::{is_drive_link, Document, DocumentType};
use vms_core::policy::{authorize, Action, Actor};
use vms_core::{DomainError, Snowflake};

use crate::dto::{DocumentListResponse, DocumentResponse, UploadDocumentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Document service
pub struct DocumentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DocumentService<'a> {
    /// Create a new DocumentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload a document link
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn upload(
        &self,
        actor: &Actor,
        request: UploadDocumentRequest,
    ) -> ServiceResult<DocumentResponse> {
        authorize(actor, Action::UploadDocument)?;

        if !is_drive_link(&request.drive_link) {
            return Err(DomainError::InvalidDriveLink.into());
        }

        let doc_type = DocumentType::parse(&request.doc_type).ok_or_else(|| {
            ServiceError::validation(
                "doc_type must be \"submission\", \"signed\", \"proposal\", or \"update\"",
            )
        })?;

        // Sharing fields are admin-only
        if request.is_global || !request.team_ids.is_empty() {
            authorize(actor, Action::ShareDocument)?;
            for team_id in &request.team_ids {
                self.ctx
                    .team_repo()
                    .find_by_id(*team_id)
                    .await?
                    .ok_or(DomainError::TeamNotFound(*team_id))?;
            }
        }

        let mut document = Document::new(
            self.ctx.generate_id(),
            actor.id,
            request.title,
            request.drive_link,
            doc_type,
        );
        document.is_global = request.is_global;
        document.team_ids = request.team_ids;

        self.ctx.document_repo().create(&document).await?;

        info!(document_id = %document.id, "Document uploaded");

        Ok(DocumentResponse::from(&document))
    }

    /// List documents visible to the caller
    #[instrument(skip(self))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<DocumentListResponse> {
        let documents = if actor.is_admin() {
            self.ctx.document_repo().find_all().await?
        } else {
            let team_ids: Vec<Snowflake> = self
                .ctx
                .team_repo()
                .find_memberships(actor.id)
                .await?
                .into_iter()
                .map(|m| m.team_id)
                .collect();
            self.ctx
                .document_repo()
                .find_visible(actor.id, &team_ids)
                .await?
        };

        Ok(DocumentListResponse {
            documents: documents.iter().map(DocumentResponse::from).collect(),
        })
    }

    /// Get a single document the caller is allowed to see
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        actor: &Actor,
        document_id: Snowflake,
    ) -> ServiceResult<DocumentResponse> {
        let document = self
            .ctx
            .document_repo()
            .find_by_id(document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(document_id))?;

        let team_ids: Vec<Snowflake> = self
            .ctx
            .team_repo()
            .find_memberships(actor.id)
            .await?
            .into_iter()
            .map(|m| m.team_id)
            .collect();

        // A teammate's upload is visible even without an explicit share
        let mut teammate_uploader = false;
        for team_id in &team_ids {
            if self
                .ctx
                .team_repo()
                .find_member(*team_id, document.uploader_id)
                .await?
                .is_some()
            {
                teammate_uploader = true;
                break;
            }
        }

        authorize(
            actor,
            Action::ViewDocument {
                document: &document,
                team_ids: &team_ids,
                teammate_uploader,
            },
        )?;

        Ok(DocumentResponse::from(&document))
    }

    /// Delete an own document; admins can delete any
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, document_id: Snowflake) -> ServiceResult<()> {
        let document = self
            .ctx
            .document_repo()
            .find_by_id(document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(document_id))?;

        if !actor.is_admin() && !document.is_uploader(actor.id) {
            // Not-found masking, same as reads
            return Err(DomainError::DocumentNotFound(document_id).into());
        }

        self.ctx.document_repo().delete(document_id).await?;

        info!(document_id = %document_id, "Document deleted");
        Ok(())
    }
}
