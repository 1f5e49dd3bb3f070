//! Missing-data policy.
//!
//! Source files spell "no data" in several ways. Every spelling collapses to
//! the [`MISSING_DATA`] sentinel before validation and again when output rows
//! are published.

/// Canonical missing-data sentinel.
pub const MISSING_DATA: &str = "MD";

/// Lower-case spellings treated as missing data.
const SYNONYMS: [&str; 4] = ["n/a", "na", "unk", "unknown"];

fn is_synonym(trimmed: &str) -> bool {
    SYNONYMS
        .iter()
        .any(|synonym| trimmed.eq_ignore_ascii_case(synonym))
}

/// Returns true when the value is blank, the sentinel, or a known synonym.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == MISSING_DATA || is_synonym(trimmed)
}

/// Trims a raw cell and substitutes the sentinel for blanks and synonyms.
///
/// Anything else is returned trimmed, unchanged in case.
pub fn canonicalize(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_synonym(trimmed) {
        MISSING_DATA
    } else {
        trimmed
    }
}

/// Rewrites any missing-data variant to the sentinel, leaving other cells as-is.
pub fn normalize_cell(cell: String) -> String {
    if is_missing(&cell) {
        MISSING_DATA.to_string()
    } else {
        cell
    }
}
