//! Value-format rules.
//!
//! Each family is a full-string matcher. Patterns with alternations wrap the
//! whole alternation in an anchored group so that no branch can match a prefix
//! or suffix alone.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("invalid format-rule regex")
}

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    anchored(r"\d{1,2}[/-]\d{1,2}[/-](?:\d{2}|\d{4})|\d{4}[/-]\d{1,2}[/-]\d{1,2}|MD")
});
static YES_NO_NA: LazyLock<Regex> = LazyLock::new(|| anchored(r"[YN]|NA|MD"));
static CHECKED: LazyLock<Regex> = LazyLock::new(|| anchored(r"Checked|Unchecked|MD"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| anchored(r"[\d,]+|MD"));
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| anchored(r"[\d,]+(?:\.\d+)?|MD"));
static DECIMAL_RANGE: LazyLock<Regex> =
    LazyLock::new(|| anchored(r"\d+(?:\.\d+)?(?:\s*-\s*\d+(?:\.\d+)?)?|MD"));
static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| anchored(r"\d{1,2}(?::\d{2})?\s?(?:am|AM|pm|PM)|\d{2}:\d{2}|MD"));
static STUDY_ID: LazyLock<Regex> = LazyLock::new(|| anchored(r"[Pp][Aa]\d+"));

/// The accepted shape of a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatRule {
    /// No rule was reviewed for this column; every value passes.
    Unvalidated,
    FreeText,
    /// `M/D/YY`, `M/D/YYYY` or `YYYY/M/D`, with `/` or `-`.
    Date,
    YesNoNa,
    Checked,
    Integer,
    /// Whole-number durations, same shape as [`FormatRule::Integer`].
    Days,
    Decimal,
    /// A decimal or an `a-b` range of decimals.
    DecimalRange,
    /// `H(:MM)? am|pm` or 24-hour `HH:MM`.
    TimeOfDay,
    /// PharmGKB subject identifiers such as `PA1234`.
    StudyId,
    /// One of a fixed set of literal values.
    OneOf(&'static [&'static str]),
}

impl FormatRule {
    /// Tests an already-canonicalized value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Unvalidated | Self::FreeText => true,
            Self::Date => DATE.is_match(value),
            Self::YesNoNa => YES_NO_NA.is_match(value),
            Self::Checked => CHECKED.is_match(value),
            Self::Integer | Self::Days => INTEGER.is_match(value),
            Self::Decimal => DECIMAL.is_match(value),
            Self::DecimalRange => DECIMAL_RANGE.is_match(value),
            Self::TimeOfDay => TIME_OF_DAY.is_match(value),
            Self::StudyId => STUDY_ID.is_match(value),
            Self::OneOf(values) => values.contains(&value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unvalidated => "unvalidated",
            Self::FreeText => "free text",
            Self::Date => "date",
            Self::YesNoNa => "Y/N/NA",
            Self::Checked => "checkbox",
            Self::Integer => "integer",
            Self::Days => "days",
            Self::Decimal => "decimal",
            Self::DecimalRange => "decimal range",
            Self::TimeOfDay => "time of day",
            Self::StudyId => "study id",
            Self::OneOf(_) => "one of",
        }
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneOf(values) => write!(f, "one of {}", values.join("|")),
            other => f.write_str(other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_accept_both_orderings() {
        for value in ["1/2/17", "10/24/2019", "10-24-2019", "2019-10-24", "2019/1/2", "MD"] {
            assert!(FormatRule::Date.matches(value), "{value}");
        }
        for value in ["1/2/201", "201-10-24", "2019-10", "10/24/2019 1:00", "Oct 24"] {
            assert!(!FormatRule::Date.matches(value), "{value}");
        }
    }

    #[test]
    fn time_of_day_shapes() {
        for value in ["2:00 pm", "2pm", "11:45AM", "14:30", "MD"] {
            assert!(FormatRule::TimeOfDay.matches(value), "{value}");
        }
        for value in ["2:0 pm", "noon", "1430", "2:00 p.m."] {
            assert!(!FormatRule::TimeOfDay.matches(value), "{value}");
        }
    }

    #[test]
    fn numbers_allow_thousands_separators() {
        assert!(FormatRule::Integer.matches("1,200"));
        assert!(!FormatRule::Integer.matches("12.5"));
        assert!(FormatRule::Decimal.matches("1,200.25"));
        assert!(!FormatRule::Decimal.matches("10.1.3"));
        assert!(FormatRule::DecimalRange.matches("2.0 - 3.0"));
        assert!(!FormatRule::DecimalRange.matches("2.0-"));
    }

    #[test]
    fn one_of_is_exact() {
        let sites = FormatRule::OneOf(&["NU", "UIC", "UofC"]);
        assert!(sites.matches("UofC"));
        assert!(!sites.matches("UofCX"));
        assert!(!sites.matches("XNU"));
        assert!(!sites.matches("Stanford"));
    }

    #[test]
    fn study_id_prefix_is_case_insensitive() {
        assert!(FormatRule::StudyId.matches("PA1"));
        assert!(FormatRule::StudyId.matches("pa1"));
        assert!(FormatRule::StudyId.matches("Pa123"));
        assert!(!FormatRule::StudyId.matches("PA1x"));
        assert!(!FormatRule::StudyId.matches("PB1"));
        assert!(!FormatRule::StudyId.matches("PA"));
    }
}
