use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{DocumentId, DocumentStatus, DocumentUpload, Employee, ReviewResolution};
use super::repository::{DocumentRepository, RepositoryError, ReviewPublisher};
use super::service::{DocumentIntakeService, DocumentServiceError};

/// Page size for the review queue when the caller does not ask for one.
const DEFAULT_PENDING_PAGE_LIMIT: usize = 20;

/// Router builder exposing HTTP endpoints for intake, status, review
/// resolution, and stateless classification.
pub fn document_router<R, P>(service: Arc<DocumentIntakeService<R, P>>) -> Router
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    Router::new()
        .route("/api/v1/documents", post(ingest_handler::<R, P>))
        .route(
            "/api/v1/documents/classify",
            post(classify_handler::<R, P>),
        )
        .route(
            "/api/v1/documents/pending",
            get(pending_handler::<R, P>),
        )
        .route(
            "/api/v1/documents/:document_id",
            get(status_handler::<R, P>),
        )
        .route(
            "/api/v1/documents/:document_id/confirm",
            post(confirm_handler::<R, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentIntakeRequest {
    pub(crate) file_name: String,
    pub(crate) storage_key: String,
    #[serde(default)]
    pub(crate) uploaded_by: Option<String>,
    #[serde(default)]
    pub(crate) received_on: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) file_name: String,
    #[serde(default)]
    pub(crate) employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PendingQuery {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn ingest_handler<R, P>(
    State(service): State<Arc<DocumentIntakeService<R, P>>>,
    axum::Json(request): axum::Json<DocumentIntakeRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    let DocumentIntakeRequest {
        file_name,
        storage_key,
        uploaded_by,
        received_on,
        employees,
    } = request;

    let upload = DocumentUpload {
        file_name,
        storage_key,
        uploaded_by,
        received_on,
    };

    match service.ingest(upload, &employees) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(DocumentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "document already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn classify_handler<R, P>(
    State(service): State<Arc<DocumentIntakeService<R, P>>>,
    axum::Json(request): axum::Json<ClassifyRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    let result = service.classify(&request.file_name, &request.employees);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn pending_handler<R, P>(
    State(service): State<Arc<DocumentIntakeService<R, P>>>,
    Query(query): Query<PendingQuery>,
) -> Response
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_PENDING_PAGE_LIMIT);
    match service.pending_review(limit) {
        Ok(records) => {
            let views = records
                .iter()
                .map(|record| record.status_view())
                .collect::<Vec<_>>();
            let payload = json!({
                "total": views.len(),
                "documents": views,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<Arc<DocumentIntakeService<R, P>>>,
    Path(document_id): Path<String>,
) -> Response
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    let id = DocumentId(document_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(DocumentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "document_id": id.0,
                "status": DocumentStatus::PendingReview.label(),
                "filing_rationale": "pending classification",
                "document_category": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn confirm_handler<R, P>(
    State(service): State<Arc<DocumentIntakeService<R, P>>>,
    Path(document_id): Path<String>,
    axum::Json(resolution): axum::Json<ReviewResolution>,
) -> Response
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    let id = DocumentId(document_id);
    match service.confirm(&id, resolution) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(DocumentServiceError::UnknownCategory(category)) => {
            let payload = json!({
                "error": format!("unknown document category '{category}'"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(DocumentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "document not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
