use serde::Serialize;

use crate::format::FormatRule;
use crate::missing::{canonicalize, is_missing};
use crate::range::{BadNumber, RangeRule};

/// One column definition: a stable key, the header text and its rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDef {
    pub key: &'static str,
    pub display_name: &'static str,
    pub format: FormatRule,
    pub range: RangeRule,
}

impl FieldDef {
    pub const fn new(key: &'static str, display_name: &'static str, format: FormatRule) -> Self {
        Self {
            key,
            display_name,
            format,
            range: RangeRule::None,
        }
    }

    /// Inclusive lower and upper bounds.
    pub const fn bounded(mut self, lo: f64, hi: f64) -> Self {
        self.range = RangeRule::Bounded { lo, hi };
        self
    }

    /// Inclusive lower bound, unbounded above.
    pub const fn at_least(mut self, lo: f64) -> Self {
        self.range = RangeRule::MinOnly { lo };
        self
    }

    /// The value must equal `value` exactly.
    pub const fn exactly(mut self, value: f64) -> Self {
        self.range = RangeRule::ExactMatch { value };
        self
    }

    /// True when no format rule has been reviewed for this field.
    pub fn is_unvalidated(&self) -> bool {
        matches!(self.format, FormatRule::Unvalidated)
    }

    /// Checks the shape of a raw cell. Blanks and missing-data synonyms are
    /// tested as the `MD` sentinel.
    pub fn validate(&self, raw: &str) -> bool {
        self.format.matches(canonicalize(raw))
    }

    /// Applies the range rule to a raw cell.
    ///
    /// Returns `None` when the field has no range rule or the value is missing.
    pub fn test_range(&self, raw: &str) -> Option<Result<bool, BadNumber>> {
        if self.range.is_none() || is_missing(raw) {
            return None;
        }
        Some(self.range.test(raw))
    }

    pub fn range_description(&self) -> Option<String> {
        self.range.describe()
    }
}
