use super::super::domain::Employee;
use super::super::normalizer::normalize;

/// Name tokens of two characters or fewer are noise: initials and short
/// particles such as "de" or "la".
const MIN_TOKEN_LEN: usize = 3;

/// An employee is a candidate only when at least this many of its name
/// tokens appear in the filename. A single matching token must never file a
/// document, or employees sharing a first name would swallow each other's
/// paperwork.
const MIN_MATCHED_TOKENS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EmployeeMatch {
    pub(crate) index: usize,
    pub(crate) matched_tokens: usize,
    pub(crate) strength: f32,
}

/// Select the roster entry whose qualifying name tokens cover the normalized
/// text best. Strength is the matched-to-qualifying ratio; the strict
/// comparison keeps the first roster occurrence on ties.
pub(crate) fn match_employee(
    normalized_text: &str,
    employees: &[Employee],
) -> Option<EmployeeMatch> {
    let mut best: Option<EmployeeMatch> = None;

    for (index, employee) in employees.iter().enumerate() {
        let normalized_name = normalize(&employee.full_name);
        let qualifying = normalized_name
            .split(' ')
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .collect::<Vec<_>>();

        let matched = qualifying
            .iter()
            .filter(|token| normalized_text.contains(*token))
            .count();

        if matched < MIN_MATCHED_TOKENS {
            continue;
        }

        let strength = matched as f32 / qualifying.len() as f32;
        let improves = best
            .as_ref()
            .map(|current| strength > current.strength)
            .unwrap_or(true);

        if improves {
            best = Some(EmployeeMatch {
                index,
                matched_tokens: matched,
                strength,
            });
        }
    }

    best
}
