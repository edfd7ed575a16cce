//! Technologies field encoding for project entries. The canonical model is a
//! sequence of strings; the comma-separated text form is a transient
//! view-layer encoding, handled only through this parse/format pair.
//!
//! Lossy by contract: a technology name that itself contains a comma cannot
//! round-trip through the text form.

/// Splits a comma-separated technologies field, trimming each piece and
/// dropping empties.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// The inverse view encoding for display in the single text input.
pub fn format_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}
