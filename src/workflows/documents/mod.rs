//! Document intake: filename classification, employee matching, and review
//! routing for files uploaded to the workforce portal.
//!
//! The classifier is deliberately content-blind. It only ever sees the
//! filename and the caller's roster, so it stays a pure function the upload
//! API can call from any handler without coordination.

pub mod classifier;
pub mod domain;
mod normalizer;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classifier::{
    category_table, CategoryDefinition, ClassificationEngine, ClassificationResult,
    FALLBACK_CATEGORY_ID,
};
pub use domain::{
    Confidence, DocumentId, DocumentStatus, DocumentUpload, Employee, ReviewResolution,
};
pub use normalizer::normalize;
pub use repository::{
    DocumentRecord, DocumentRepository, DocumentStatusView, RepositoryError, ReviewAlert,
    ReviewError, ReviewPublisher,
};
pub use roster::{RosterImportError, RosterImporter};
pub use router::document_router;
pub use service::{DocumentIntakeService, DocumentServiceError};
