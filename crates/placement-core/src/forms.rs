//! Helpers for admin form input.

/// Split a comma-separated requirements field into trimmed, non-empty entries.
#[must_use]
pub fn parse_requirements(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|req| !req.is_empty())
        .map(String::from)
        .collect()
}

/// Join requirements back into the single-line form representation.
#[must_use]
pub fn join_requirements(requirements: &[String]) -> String {
    requirements.join(", ")
}
