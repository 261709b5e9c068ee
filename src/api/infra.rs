use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::workflows::documents::{
    DocumentId, DocumentRecord, DocumentRepository, DocumentStatus, RepositoryError, ReviewAlert,
    ReviewError, ReviewPublisher,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentRepository {
    records: Arc<Mutex<HashMap<DocumentId, DocumentRecord>>>,
}

impl DocumentRepository for InMemoryDocumentRepository {
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
        if guard.contains_key(&record.document_id) {
            guard.insert(record.document_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<DocumentRecord>, RepositoryError> {
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
pub(crate) struct InMemoryReviewPublisher {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl ReviewPublisher for InMemoryReviewPublisher {
    fn publish(&self, alert: ReviewAlert) -> Result<(), ReviewError> {
        let mut guard = self.events.lock().expect("review mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryReviewPublisher {
    pub(crate) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("review mutex poisoned").clone()
    }
}
