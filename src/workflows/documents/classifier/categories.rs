use super::super::normalizer::normalize;
use std::sync::OnceLock;

/// Category id assigned when no keyword list matches the filename.
pub const FALLBACK_CATEGORY_ID: &str = "otros";

/// One entry of the fixed category table. Keywords are stored in normalized
/// form so accented spellings fold onto the same comparison key.
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: Vec<String>,
}

static CATEGORY_TABLE: OnceLock<Vec<CategoryDefinition>> = OnceLock::new();

/// The ordered category table. Order encodes priority: the first keyword hit
/// wins, so a payslip filename that also mentions "documento" still files as
/// a payslip. Reordering entries changes outcomes for ambiguous filenames.
pub fn category_table() -> &'static [CategoryDefinition] {
    CATEGORY_TABLE.get_or_init(|| {
        const CATEGORIES: &[(&str, &str, &[&str])] = &[
            (
                "nomina",
                "Nómina",
                &["nomina", "nómina", "payroll", "salary", "salario", "sueldo"],
            ),
            (
                "contrato",
                "Contrato",
                &["contrato", "contract", "agreement", "acuerdo", "convenio"],
            ),
            (
                "dni",
                "Documento de identidad",
                &["dni", "documento identidad", "cedula", "id"],
            ),
            (
                "justificante",
                "Justificante",
                &[
                    "justificante",
                    "certificado",
                    "comprobante",
                    "vacaciones",
                    "permiso",
                    "baja",
                    "medico",
                ],
            ),
            (
                "otros",
                "Otros",
                &[
                    "irpf",
                    "hacienda",
                    "impuesto",
                    "declaracion",
                    "renta",
                    "fiscal",
                    "modelo",
                    "aeat",
                ],
            ),
        ];

        let mut table = Vec::with_capacity(CATEGORIES.len());
        for &(id, display_name, keywords) in CATEGORIES {
            table.push(CategoryDefinition {
                id,
                display_name,
                keywords: keywords.iter().map(|keyword| normalize(keyword)).collect(),
            });
        }
        table
    })
}

/// First category (in table order) with any keyword appearing as a substring
/// of the normalized text. Substring rather than token matching: a keyword
/// embedded in a longer word still counts, trading precision for recall.
pub(crate) fn classify_category(
    normalized_text: &str,
    categories: &[CategoryDefinition],
) -> &'static str {
    categories
        .iter()
        .find(|category| {
            category
                .keywords
                .iter()
                .any(|keyword| normalized_text.contains(keyword.as_str()))
        })
        .map(|category| category.id)
        .unwrap_or(FALLBACK_CATEGORY_ID)
}

pub(crate) fn is_known_category(id: &str, categories: &[CategoryDefinition]) -> bool {
    categories.iter().any(|category| category.id == id)
}
