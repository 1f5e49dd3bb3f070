//! Numeric range rules.

use serde::Serialize;

/// A value that could not be read as a number (or a `a-b` range of numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadNumber;

/// Inclusive numeric bounds attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeRule {
    #[default]
    None,
    /// Both bounds inclusive. Accepts a single number or a `a-b` expression.
    Bounded { lo: f64, hi: f64 },
    /// Lower bound only.
    MinOnly { lo: f64 },
    /// Declared with equal bounds; the value must equal it exactly.
    ExactMatch { value: f64 },
}

impl RangeRule {
    /// Builds a two-bound rule, collapsing equal bounds into [`RangeRule::ExactMatch`].
    pub fn between(lo: f64, hi: f64) -> Self {
        if lo == hi {
            Self::ExactMatch { value: lo }
        } else {
            Self::Bounded { lo, hi }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Evaluates the rule against a non-missing raw value.
    ///
    /// Returns `Ok(true)` for rules without bounds.
    pub fn test(&self, raw: &str) -> Result<bool, BadNumber> {
        match *self {
            Self::None => Ok(true),
            Self::MinOnly { lo } => parse_number(raw).map(|value| value >= lo),
            Self::Bounded { lo, hi } => {
                let (low, high) = parse_endpoints(raw)?;
                Ok(low >= lo && high <= hi)
            }
            Self::ExactMatch { value } => {
                let (low, high) = parse_endpoints(raw)?;
                Ok(low == value && high == value)
            }
        }
    }

    /// Human-readable bounds used in report messages.
    pub fn describe(&self) -> Option<String> {
        match *self {
            Self::None => None,
            Self::Bounded { lo, hi } => Some(format!("{lo:.2}-{hi:.2}")),
            Self::MinOnly { lo } => Some(format!("{lo:.6}+")),
            Self::ExactMatch { value } => Some(format!("{value:.0}")),
        }
    }
}

/// Parses a number after trimming and stripping thousands separators.
pub fn parse_number(raw: &str) -> Result<f64, BadNumber> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return Err(BadNumber);
    }
    cleaned.parse::<f64>().map_err(|_| BadNumber)
}

/// Reads either a single number (both endpoints equal) or a `a-b` expression.
fn parse_endpoints(raw: &str) -> Result<(f64, f64), BadNumber> {
    match raw.split_once('-') {
        Some((low, high)) => {
            if high.contains('-') {
                return Err(BadNumber);
            }
            Ok((parse_number(low)?, parse_number(high)?))
        }
        None => {
            let value = parse_number(raw)?;
            Ok((value, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_is_inclusive() {
        let rule = RangeRule::between(100.0, 450.0);
        assert_eq!(rule.test("100"), Ok(true));
        assert_eq!(rule.test("450"), Ok(true));
        assert_eq!(rule.test("99.99"), Ok(false));
        assert_eq!(rule.test("450.01"), Ok(false));
    }

    #[test]
    fn commas_are_stripped_before_parsing() {
        let rule = RangeRule::between(100.0, 450.0);
        assert_eq!(rule.test("1,000"), Ok(false));
        assert_eq!(rule.test(" 2,50 "), Ok(true));
        assert_eq!(RangeRule::MinOnly { lo: 18.0 }.test("1,018"), Ok(true));
    }

    #[test]
    fn range_expression_checks_both_endpoints() {
        let rule = RangeRule::between(1.5, 3.5);
        assert_eq!(rule.test("2.0-3.0"), Ok(true));
        assert_eq!(rule.test("2.0 - 3.0"), Ok(true));
        assert_eq!(rule.test("1.0-3.0"), Ok(false));
        assert_eq!(rule.test("2.0-4.0"), Ok(false));
        assert_eq!(rule.test("2-3-4"), Err(BadNumber));
    }

    #[test]
    fn unparsable_values_are_bad_numbers() {
        let rule = RangeRule::between(0.0, 20.0);
        assert_eq!(rule.test("abc"), Err(BadNumber));
        assert_eq!(rule.test("-5"), Err(BadNumber));
        assert_eq!(RangeRule::MinOnly { lo: 18.0 }.test("18-20"), Err(BadNumber));
    }

    #[test]
    fn equal_bounds_become_exact_match() {
        let rule = RangeRule::between(75.0, 75.0);
        assert_eq!(rule, RangeRule::ExactMatch { value: 75.0 });
        assert_eq!(rule.test("75"), Ok(true));
        assert_eq!(rule.test("150"), Ok(false));
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            RangeRule::between(0.01, 15.0).describe().as_deref(),
            Some("0.01-15.00")
        );
        assert_eq!(RangeRule::between(75.0, 75.0).describe().as_deref(), Some("75"));
        assert_eq!(RangeRule::MinOnly { lo: 18.0 }.describe().as_deref(), Some("18.000000+"));
        assert_eq!(RangeRule::None.describe(), None);
    }
}
