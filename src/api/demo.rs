use crate::api::infra::{InMemoryDocumentRepository, InMemoryReviewPublisher};
use crate::error::AppError;
use crate::workflows::documents::{
    category_table, ClassificationEngine, ClassificationResult, DocumentIntakeService,
    DocumentUpload, Employee, RosterImporter,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Filename to classify (extension included is fine)
    #[arg(long)]
    pub(crate) file_name: String,
    /// Roster CSV export (Id,Full Name,Email,Role)
    #[arg(long)]
    pub(crate) roster: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV export; a built-in sample roster is used otherwise
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs { file_name, roster } = args;

    let employees = RosterImporter::from_path(roster)?;
    let engine = ClassificationEngine::new();
    let result = engine.classify(&file_name, &employees);

    render_classification(&file_name, &result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { roster } = args;

    let employees = match roster {
        Some(path) => RosterImporter::from_path(path)?,
        None => sample_roster(),
    };

    let repository = Arc::new(InMemoryDocumentRepository::default());
    let reviews = Arc::new(InMemoryReviewPublisher::default());
    let service = DocumentIntakeService::new(repository, reviews.clone());

    println!("Document intake demo");
    println!("Roster: {} employees", employees.len());

    let uploads = [
        "nomina_maria_lopez_vega_marzo.pdf",
        "Contrato indefinido - Andrés Castillo Romero.pdf",
        "justificante_medico_03_2025.pdf",
        "escaneo_0001.pdf",
    ];

    for file_name in uploads {
        let upload = DocumentUpload {
            file_name: file_name.to_string(),
            storage_key: format!("uploads/demo/{file_name}"),
            uploaded_by: Some("demo".to_string()),
            received_on: None,
        };
        let record = match service.ingest(upload, &employees) {
            Ok(record) => record,
            Err(err) => {
                println!("  Intake rejected: {}", err);
                continue;
            }
        };

        println!(
            "\n- {} -> {} [{}]",
            record.file_name,
            record.classification.document_category,
            record.classification.confidence.label()
        );
        println!("  {}", record.filing_rationale());
    }

    let queued = reviews.events();
    if queued.is_empty() {
        println!("\nReview queue: empty");
    } else {
        println!("\nReview queue");
        for alert in queued {
            println!(
                "- {} ({} confidence)",
                alert.document_id.0,
                alert.confidence.label()
            );
        }
    }

    Ok(())
}

fn render_classification(file_name: &str, result: &ClassificationResult) {
    println!("Classification for '{file_name}'");

    let display_name = category_table()
        .iter()
        .find(|category| category.id == result.document_category)
        .map(|category| category.display_name)
        .unwrap_or(result.document_category.as_str());
    println!("Category: {} ({display_name})", result.document_category);

    match &result.employee {
        Some(employee) => println!("Employee: {} (#{})", employee.full_name, employee.id),
        None => println!("Employee: no match"),
    }
    println!("Confidence: {}", result.confidence.label());
}

fn sample_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            full_name: "María López Vega".to_string(),
            email: "maria.lopez@example.com".to_string(),
            role: "engineer".to_string(),
        },
        Employee {
            id: 2,
            full_name: "Andrés Castillo Romero".to_string(),
            email: "andres.castillo@example.com".to_string(),
            role: "accountant".to_string(),
        },
        Employee {
            id: 3,
            full_name: "Lucía Fernández Prado".to_string(),
            email: "lucia.fernandez@example.com".to_string(),
            role: "hr".to_string(),
        },
    ]
}
