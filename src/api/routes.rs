use crate::api::infra::AppState;
use crate::error::AppError;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use crate::workflows::documents::{
    document_router, ClassificationEngine, DocumentIntakeService, DocumentRepository,
    ReviewPublisher, RosterImporter,
};

pub(crate) fn with_document_routes<R, P>(service: Arc<DocumentIntakeService<R, P>>) -> axum::Router
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    document_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/documents/classify-batch",
            axum::routing::post(classify_batch_endpoint),
        )
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchClassifyRequest {
    /// Roster CSV export (Id,Full Name,Email,Role) pasted by the caller.
    pub(crate) roster_csv: String,
    #[serde(default)]
    pub(crate) file_names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchClassifyResponse {
    pub(crate) total: usize,
    pub(crate) results: Vec<BatchClassifyEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchClassifyEntry {
    pub(crate) file_name: String,
    pub(crate) document_category: String,
    pub(crate) confidence: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) employee_name: Option<String>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(std::sync::atomic::Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "starting" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn classify_batch_endpoint(
    Json(payload): Json<BatchClassifyRequest>,
) -> Result<Json<BatchClassifyResponse>, AppError> {
    let BatchClassifyRequest {
        roster_csv,
        file_names,
    } = payload;

    let employees = RosterImporter::from_reader(Cursor::new(roster_csv.into_bytes()))?;
    let engine = ClassificationEngine::new();

    let results = file_names
        .into_iter()
        .map(|file_name| {
            let result = engine.classify(&file_name, &employees);
            BatchClassifyEntry {
                file_name,
                document_category: result.document_category,
                confidence: result.confidence.label(),
                employee_id: result.employee.as_ref().map(|employee| employee.id),
                employee_name: result.employee.map(|employee| employee.full_name),
            }
        })
        .collect::<Vec<_>>();

    Ok(Json(BatchClassifyResponse {
        total: results.len(),
        results,
    }))
}
