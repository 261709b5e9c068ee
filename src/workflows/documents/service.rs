use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;

use super::classifier::{ClassificationEngine, ClassificationResult};
use super::domain::{Confidence, DocumentId, DocumentStatus, DocumentUpload, Employee, ReviewResolution};
use super::repository::{
    DocumentRecord, DocumentRepository, RepositoryError, ReviewAlert, ReviewError, ReviewPublisher,
};

/// Service composing the classification engine, document repository, and
/// review-queue publisher.
pub struct DocumentIntakeService<R, P> {
    engine: ClassificationEngine,
    repository: Arc<R>,
    reviews: Arc<P>,
}

static DOCUMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_document_id() -> DocumentId {
    let id = DOCUMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DocumentId(format!("doc-{id:06}"))
}

impl<R, P> DocumentIntakeService<R, P>
where
    R: DocumentRepository + 'static,
    P: ReviewPublisher + 'static,
{
    pub fn new(repository: Arc<R>, reviews: Arc<P>) -> Self {
        Self {
            engine: ClassificationEngine::new(),
            repository,
            reviews,
        }
    }

    /// Classify an upload against the supplied roster and persist the
    /// result. High-confidence results auto-file; everything else lands in
    /// the review queue.
    pub fn ingest(
        &self,
        upload: DocumentUpload,
        employees: &[Employee],
    ) -> Result<DocumentRecord, DocumentServiceError> {
        let classification = self.engine.classify(&upload.file_name, employees);
        let received_on = upload
            .received_on
            .unwrap_or_else(|| Local::now().date_naive());
        let status = match classification.confidence {
            Confidence::High => DocumentStatus::AutoFiled,
            Confidence::Medium | Confidence::Low => DocumentStatus::PendingReview,
        };

        let record = DocumentRecord {
            document_id: next_document_id(),
            file_name: upload.file_name,
            storage_key: upload.storage_key,
            uploaded_by: upload.uploaded_by,
            received_on,
            status,
            classification,
        };

        let stored = self.repository.insert(record)?;

        if stored.status == DocumentStatus::PendingReview {
            let mut details = BTreeMap::new();
            details.insert("file_name".to_string(), stored.file_name.clone());
            details.insert(
                "document_category".to_string(),
                stored.classification.document_category.clone(),
            );
            self.reviews.publish(ReviewAlert {
                document_id: stored.document_id.clone(),
                confidence: stored.classification.confidence,
                details,
            })?;
        }

        Ok(stored)
    }

    /// Run the classifier without persisting anything. Used by the
    /// stateless endpoint and the CLI.
    pub fn classify(&self, file_name: &str, employees: &[Employee]) -> ClassificationResult {
        self.engine.classify(file_name, employees)
    }

    /// Fetch a document's record and current status for API responses.
    pub fn get(&self, document_id: &DocumentId) -> Result<DocumentRecord, DocumentServiceError> {
        let record = self
            .repository
            .fetch(document_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Apply a reviewer's resolution, overriding the machine classification.
    pub fn confirm(
        &self,
        document_id: &DocumentId,
        resolution: ReviewResolution,
    ) -> Result<DocumentRecord, DocumentServiceError> {
        if !self.engine.is_known_category(&resolution.document_category) {
            return Err(DocumentServiceError::UnknownCategory(
                resolution.document_category,
            ));
        }

        let mut record = self
            .repository
            .fetch(document_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.classification.document_category = resolution.document_category;
        record.classification.employee = resolution.employee;
        record.status = DocumentStatus::Confirmed;

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Documents awaiting a reviewer, oldest assignment order left to the
    /// repository implementation.
    pub fn pending_review(
        &self,
        limit: usize,
    ) -> Result<Vec<DocumentRecord>, DocumentServiceError> {
        Ok(self.repository.pending(limit)?)
    }
}

/// Error raised by the document intake service.
#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error("unknown document category '{0}'")]
    UnknownCategory(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Review(#[from] ReviewError),
}
