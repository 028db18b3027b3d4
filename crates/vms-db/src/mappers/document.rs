//! Document entity <-> model mapper

use vms_core::entities::{Document, DocumentType};
use vms_core::value_objects::Snowflake;

use crate::models::DocumentModel;

/// Convert DocumentModel to Document entity
impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Self {
        Document {
            id: Snowflake::new(model.id),
            uploader_id: Snowflake::new(model.uploader_id),
            title: model.title,
            drive_link: model.drive_link,
            doc_type: DocumentType::parse(&model.doc_type).unwrap_or(DocumentType::Submission),
            is_global: model.is_global,
            team_ids: model.team_ids.into_iter().map(Snowflake::new).collect(),
            created_at: model.created_at,
        }
    }
}
