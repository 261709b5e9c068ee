use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Roster entry supplied by the caller per request. Only `full_name`
/// participates in matching; the remaining fields pass through untouched so
/// results identify the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Upload metadata accepted at intake. The file bytes live in object
/// storage; only the storage key travels through this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub storage_key: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub received_on: Option<NaiveDate>,
}

/// Coarse trust signal attached to a classification. Downstream review
/// workflows branch on exactly these three tiers, so the mapping in the
/// engine is part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Filing state tracked for each stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    AutoFiled,
    PendingReview,
    Confirmed,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentStatus::AutoFiled => "auto_filed",
            DocumentStatus::PendingReview => "pending_review",
            DocumentStatus::Confirmed => "confirmed",
        }
    }
}

/// A reviewer's resolution for a document that was routed to the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResolution {
    pub document_category: String,
    #[serde(default)]
    pub employee: Option<Employee>,
}
