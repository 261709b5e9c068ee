use super::common::*;
use crate::workflows::documents::{
    category_table, normalize, ClassificationEngine, Confidence, FALLBACK_CATEGORY_ID,
};

fn engine() -> ClassificationEngine {
    ClassificationEngine::new()
}

#[test]
fn normalize_produces_lowercase_ascii_words() {
    assert_eq!(
        normalize("Nómina_José-RAMÍREZ (enero).PDF"),
        "nomina jose ramirez enero pdf"
    );
    assert_eq!(normalize("  Anne   Souza  "), "anne souza");
    assert_eq!(normalize("caña"), "cana");
}

#[test]
fn normalize_is_idempotent() {
    for raw in [
        "Contrato indefinido - Andrés.pdf",
        "JUSTIFICANTE médico!!",
        "doc_2024-03-14.v2",
        "",
        "   ",
        "ya normalizado 123",
    ] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "normalize must be idempotent for {raw:?}");
    }
}

#[test]
fn normalize_is_accent_insensitive() {
    assert_eq!(normalize("José"), normalize("Jose"));
    assert_eq!(normalize("Ramírez"), normalize("Ramirez"));
    assert_eq!(normalize("NÓMINA"), normalize("nomina"));
}

#[test]
fn normalize_drops_symbol_only_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("!!! ---"), "");
}

#[test]
fn category_table_shape_is_stable() {
    let categories = category_table();
    let ids = categories.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, ["nomina", "contrato", "dni", "justificante", "otros"]);

    for category in categories {
        assert!(
            !category.keywords.is_empty(),
            "category {} must carry at least one keyword",
            category.id
        );
    }
    assert_eq!(categories.last().map(|c| c.id), Some(FALLBACK_CATEGORY_ID));
}

#[test]
fn first_configured_category_wins_for_ambiguous_names() {
    let result = engine().classify("justificante_contrato_2025.pdf", &[]);
    assert_eq!(result.document_category, "contrato");

    let result = engine().classify("contrato_y_nomina_marzo.pdf", &[]);
    assert_eq!(result.document_category, "nomina");
}

#[test]
fn keywords_match_inside_longer_words() {
    let result = engine().classify("contratos_firmados.pdf", &[]);
    assert_eq!(result.document_category, "contrato");

    let result = engine().classify("certificados_2024.pdf", &[]);
    assert_eq!(result.document_category, "justificante");
}

#[test]
fn accented_keyword_spellings_fold_together() {
    let result = engine().classify("NÓMINA_marzo.pdf", &[]);
    assert_eq!(result.document_category, "nomina");
}

#[test]
fn vacation_and_leave_names_classify_as_justificante() {
    let result = engine().classify("vacaciones_agosto.pdf", &[]);
    assert_eq!(result.document_category, "justificante");
}

#[test]
fn tax_keywords_classify_as_fallback_category() {
    let result = engine().classify("modelo_111_aeat.pdf", &[]);
    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
}

#[test]
fn payslip_with_owner_tokens_is_high_confidence() {
    let result = engine().classify("nomina_juan_jose_garcia_enero.pdf", &roster());

    assert_eq!(result.document_category, "nomina");
    let matched = result.employee.expect("employee matched");
    assert_eq!(matched.id, 1);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn unrecognized_file_is_low_confidence_fallback() {
    let result = engine().classify("archivo_random.pdf", &roster());

    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
    assert!(result.employee.is_none());
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn single_name_token_never_matches_an_employee() {
    let result = engine().classify("documento_juan.pdf", &roster());

    assert!(result.employee.is_none(), "one shared first name must not file");
    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn empty_input_yields_fallback_and_low_confidence() {
    let result = engine().classify("", &[]);

    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
    assert!(result.employee.is_none());
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn two_matching_tokens_are_enough() {
    let result = engine().classify("garcia_lopez_contrato.pdf", &roster());

    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(1));
    assert_eq!(result.document_category, "contrato");
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn matched_employee_without_category_keyword_is_medium() {
    let result = engine().classify("juan_jose_garcia_lopez.pdf", &roster());

    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(1));
    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
    assert_eq!(result.confidence, Confidence::Medium);
}

#[test]
fn keyword_matched_fallback_still_caps_confidence_at_medium() {
    let result = engine().classify("irpf_juan_jose_garcia.pdf", &roster());

    assert_eq!(result.document_category, FALLBACK_CATEGORY_ID);
    assert!(result.employee.is_some());
    assert_eq!(result.confidence, Confidence::Medium);
}

#[test]
fn category_hit_without_employee_is_still_low() {
    let result = engine().classify("contrato_juan.pdf", &roster());

    assert_eq!(result.document_category, "contrato");
    assert!(result.employee.is_none());
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn accents_fold_on_both_filename_and_roster_side() {
    let result = engine().classify("NÓMINA_María_Dolores_Ruiz_marzo.pdf", &roster());

    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(2));
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn fuller_name_coverage_beats_partial_coverage() {
    let candidates = vec![
        employee(1, "Juan José García López"),
        employee(9, "Marta Soler"),
    ];

    let result = engine().classify("acta_marta_soler_garcia_lopez.pdf", &candidates);

    // García López covers 2 of 4 tokens, Marta Soler 2 of 2.
    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(9));
}

#[test]
fn ties_resolve_to_the_first_roster_entry() {
    let candidates = vec![
        employee(10, "Juan García Mora"),
        employee(11, "Juan García Mora"),
    ];

    let result = engine().classify("juan_garcia_mora_contrato.pdf", &candidates);

    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(10));
}

#[test]
fn names_with_one_qualifying_token_cannot_match() {
    let candidates = vec![employee(5, "Ana Li")];

    let result = engine().classify("ana_li_contrato.pdf", &candidates);

    assert!(result.employee.is_none());
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn short_particles_do_not_count_toward_the_threshold() {
    let candidates = vec![employee(6, "María de la O Pérez")];

    let result = engine().classify("maria_perez_nomina.pdf", &candidates);

    assert_eq!(result.employee.as_ref().map(|e| e.id), Some(6));
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn empty_roster_yields_no_match() {
    let result = engine().classify("nomina_enero.pdf", &[]);

    assert_eq!(result.document_category, "nomina");
    assert!(result.employee.is_none());
    assert_eq!(result.confidence, Confidence::Low);
}
