use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::documents::domain::{DocumentId, DocumentUpload, Employee};
use crate::workflows::documents::repository::{
    DocumentRecord, DocumentRepository, RepositoryError, ReviewAlert, ReviewError, ReviewPublisher,
};
use crate::workflows::documents::{document_router, DocumentIntakeService};

pub(super) fn employee(id: i64, full_name: &str) -> Employee {
    Employee {
        id,
        full_name: full_name.to_string(),
        email: format!("employee{id}@example.com"),
        role: "staff".to_string(),
    }
}

pub(super) fn roster() -> Vec<Employee> {
    vec![
        employee(1, "Juan José García López"),
        employee(2, "María Dolores Ruiz Sánchez"),
        employee(3, "Ana Pérez Marino"),
    ]
}

pub(super) fn upload(file_name: &str) -> DocumentUpload {
    DocumentUpload {
        file_name: file_name.to_string(),
        storage_key: format!("uploads/tenant-7/{file_name}"),
        uploaded_by: Some("portal".to_string()),
        received_on: Some(NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")),
    }
}

pub(super) fn build_service() -> (
    DocumentIntakeService<MemoryRepository, MemoryReviews>,
    Arc<MemoryRepository>,
    Arc<MemoryReviews>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let reviews = Arc::new(MemoryReviews::default());
    let service = DocumentIntakeService::new(repository.clone(), reviews.clone());
    (service, repository, reviews)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<DocumentId, DocumentRecord>>>,
}

impl DocumentRepository for MemoryRepository {
    fn insert(&self, record: DocumentRecord) -> Result<DocumentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.document_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.document_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: DocumentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.document_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<DocumentRecord>, RepositoryError> {
        use crate::workflows::documents::domain::DocumentStatus;
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut pending = guard
            .values()
            .filter(|record| record.status == DocumentStatus::PendingReview)
            .cloned()
            .collect::<Vec<_>>();
        pending.sort_by(|a, b| a.document_id.0.cmp(&b.document_id.0));
        pending.truncate(limit);
        Ok(pending)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryReviews {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl MemoryReviews {
    pub(super) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("review mutex poisoned").clone()
    }
}

impl ReviewPublisher for MemoryReviews {
    fn publish(&self, alert: ReviewAlert) -> Result<(), ReviewError> {
        self.events
            .lock()
            .expect("review mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl DocumentRepository for ConflictRepository {
    fn insert(&self, _record: DocumentRecord) -> Result<DocumentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: DocumentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<DocumentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl DocumentRepository for UnavailableRepository {
    fn insert(&self, _record: DocumentRecord) -> Result<DocumentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: DocumentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<DocumentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn document_router_with_service(
    service: DocumentIntakeService<MemoryRepository, MemoryReviews>,
) -> axum::Router {
    document_router(Arc::new(service))
}
