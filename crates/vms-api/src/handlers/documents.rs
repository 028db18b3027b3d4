//! Document handlers
//!
//! Endpoints for Google Drive/Docs link documents.

use axum::{
    extract::{Path, State},
    Json,
};
use vms_service::dto::{DocumentListResponse, DocumentResponse, UploadDocumentRequest};
use vms_service::services::DocumentService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Upload a document link
///
/// POST /api/documents/
pub async fn upload_document(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UploadDocumentRequest>,
) -> ApiResult<Created<Json<DocumentResponse>>> {
    let service = DocumentService::new(state.service_context());
    let response = service.upload(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// List documents visible to the caller
///
/// GET /api/documents/
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DocumentListResponse>> {
    let service = DocumentService::new(state.service_context());
    let response = service.list(&auth.actor()).await?;
    Ok(Json(response))
}

/// Get a single document
///
/// GET /api/documents/{document_id}/
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(document_id): Path<String>,
) -> ApiResult<Json<DocumentResponse>> {
    let document_id = document_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid document_id format"))?;

    let service = DocumentService::new(state.service_context());
    let response = service.get(&auth.actor(), document_id).await?;
    Ok(Json(response))
}

/// Delete an own document; admins can delete any
///
/// DELETE /api/documents/{document_id}/
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(document_id): Path<String>,
) -> ApiResult<NoContent> {
    let document_id = document_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid document_id format"))?;

    let service = DocumentService::new(state.service_context());
    service.delete(&auth.actor(), document_id).await?;
    Ok(NoContent)
}
