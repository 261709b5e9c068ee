use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical comparison form shared by the category classifier and the
/// employee matcher: Unicode lowercase, accents stripped via NFD, every
/// non-alphanumeric character folded to a space, whitespace collapsed.
///
/// The output contains only ASCII letters, digits, and single spaces, so
/// "Nómina_José-RAMÍREZ (enero).pdf" and "nomina jose ramirez enero pdf"
/// compare equal. Idempotent and total; empty input yields an empty string.
pub fn normalize(value: &str) -> String {
    let folded = value.to_lowercase();
    let stripped = folded
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>();
    let spaced = stripped
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
