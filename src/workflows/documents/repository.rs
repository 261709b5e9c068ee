use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classifier::ClassificationResult;
use super::domain::{Confidence, DocumentId, DocumentStatus};

/// Repository record holding the upload metadata and classification state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub document_id: DocumentId,
    pub file_name: String,
    pub storage_key: String,
    pub uploaded_by: Option<String>,
    pub received_on: NaiveDate,
    pub status: DocumentStatus,
    pub classification: ClassificationResult,
}

impl DocumentRecord {
    pub fn filing_rationale(&self) -> String {
        match self.status {
            DocumentStatus::Confirmed => "confirmed by reviewer".to_string(),
            DocumentStatus::AutoFiled => match &self.classification.employee {
                Some(employee) => format!(
                    "auto-filed as {} for {}",
                    self.classification.document_category, employee.full_name
                ),
                None => format!("auto-filed as {}", self.classification.document_category),
            },
            DocumentStatus::PendingReview => match &self.classification.employee {
                Some(employee) => format!(
                    "queued for review: matched {} but no category keyword",
                    employee.full_name
                ),
                None => "queued for review: no employee match".to_string(),
            },
        }
    }

    pub fn status_view(&self) -> DocumentStatusView {
        DocumentStatusView {
            document_id: self.document_id.clone(),
            status: self.status.label(),
            document_category: self.classification.document_category.clone(),
            confidence: self.classification.confidence.label(),
            employee_id: self
                .classification
                .employee
                .as_ref()
                .map(|employee| employee.id),
            employee_name: self
                .classification
                .employee
                .as_ref()
                .map(|employee| employee.full_name.clone()),
            filing_rationale: self.filing_rationale(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait DocumentRepository: Send + Sync {
    fn insert(&self, record: DocumentRecord) -> Result<DocumentRecord, RepositoryError>;
    fn update(&self, record: DocumentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &DocumentId) -> Result<Option<DocumentRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<DocumentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing the outbound review-queue hook (e-mail digest, in-app
/// inbox, or whatever the host application wires in).
pub trait ReviewPublisher: Send + Sync {
    fn publish(&self, alert: ReviewAlert) -> Result<(), ReviewError>;
}

/// Queue payload nudging a human to confirm a low-trust classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAlert {
    pub document_id: DocumentId,
    pub confidence: Confidence,
    pub details: BTreeMap<String, String>,
}

/// Review dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review queue unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a stored document's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatusView {
    pub document_id: DocumentId,
    pub status: &'static str,
    pub document_category: String,
    pub confidence: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub filing_rationale: String,
}
