mod categories;
mod matcher;

pub use categories::{category_table, CategoryDefinition, FALLBACK_CATEGORY_ID};

use super::domain::{Confidence, Employee};
use super::normalizer::normalize;
use serde::{Deserialize, Serialize};

/// Stateless engine inferring the owning employee and the document category
/// from an uploaded file's name. Safe to share across request handlers: the
/// only process-wide state is the immutable category table.
pub struct ClassificationEngine {
    categories: &'static [CategoryDefinition],
}

impl ClassificationEngine {
    pub fn new() -> Self {
        Self {
            categories: categories::category_table(),
        }
    }

    /// Classify a raw filename against a candidate roster. Total over its
    /// input domain: never fails, only degrades to low confidence.
    pub fn classify(&self, file_name: &str, employees: &[Employee]) -> ClassificationResult {
        let normalized = normalize(file_name);
        let document_category = categories::classify_category(&normalized, self.categories);
        let employee = matcher::match_employee(&normalized, employees)
            .map(|found| employees[found.index].clone());

        let confidence = match (&employee, document_category) {
            (Some(_), category) if category != FALLBACK_CATEGORY_ID => Confidence::High,
            (Some(_), _) => Confidence::Medium,
            (None, _) => Confidence::Low,
        };

        ClassificationResult {
            employee,
            document_category: document_category.to_string(),
            confidence,
        }
    }

    pub fn is_known_category(&self, id: &str) -> bool {
        categories::is_known_category(id, self.categories)
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of classifying one filename against a roster. The matched
/// employee is carried whole so callers can persist the identification
/// fields next to the stored file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub employee: Option<Employee>,
    pub document_category: String,
    pub confidence: Confidence,
}
