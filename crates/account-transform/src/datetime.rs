//! Date parsing and elapsed-time arithmetic.
//!
//! Site data records dates month first, as `M/D/YY`, `M/D/YYYY` or
//! `YYYY/M/D` with either `/` or `-` between the parts. Times of day are
//! twelve-hour clock readings such as `2:00 pm`.

use std::sync::LazyLock;

use account_model::is_missing;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::DateTimeParseError;

static MONTH_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2}|\d{4})$").expect("invalid month-first regex")
});
static YEAR_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("invalid year-first regex")
});
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4}) (\d{1,2}):(\d{2}) ?(AM|PM)$")
        .expect("invalid date-time regex")
});

/// Two-digit years up to this value belong to the 2000s.
const PIVOT_YEAR: i32 = 68;

fn expand_year(digits: &str) -> Option<i32> {
    let year: i32 = digits.parse().ok()?;
    if digits.len() != 2 {
        return Some(year);
    }
    Some(if year <= PIVOT_YEAR { 2000 + year } else { 1900 + year })
}

/// Parses a site date. Missing values, other shapes and impossible calendar
/// dates yield `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if is_missing(text) {
        return None;
    }
    let text = text.trim();
    let (year, month, day) = if let Some(caps) = MONTH_FIRST.captures(text) {
        (expand_year(&caps[3])?, caps[1].parse().ok()?, caps[2].parse().ok()?)
    } else {
        let caps = YEAR_FIRST.captures(text)?;
        (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Combines a month-first date and a twelve-hour time of day.
///
/// The two strings are joined with one space, slashes become dashes, runs of
/// whitespace collapse and the text is upper-cased before matching
/// `M-D-YYYY h:mm AM|PM`.
pub fn parse_datetime(date: &str, time: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let joined = format!("{date} {time}").replace('/', "-");
    let normalized = joined
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    let error = || DateTimeParseError {
        input: normalized.clone(),
    };

    let caps = DATE_TIME.captures(&normalized).ok_or_else(error)?;
    let number = |index: usize| caps[index].parse::<u32>().map_err(|_| error());
    let (month, day, hour, minute) = (number(1)?, number(2)?, number(4)?, number(5)?);
    let year = caps[3].parse::<i32>().map_err(|_| error())?;
    if !(1..=12).contains(&hour) {
        return Err(error());
    }
    let hour = hour % 12 + if &caps[6] == "PM" { 12 } else { 0 };

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(error)
}

/// Whole days from `from` to `to`; negative when `to` comes first.
pub fn diff_days(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Hours from `from` to `to` with two decimals, such as `"2.63"` or `"-2.63"`.
///
/// Exact ties round half to even, as `format!` does, so 450 seconds reads
/// `"0.12"`. A value that rounds to zero is written `"0.00"`, never `"-0.00"`.
pub fn diff_hours(from: NaiveDateTime, to: NaiveDateTime) -> String {
    let seconds = to.signed_duration_since(from).num_seconds();
    let hours = format!("{:.2}", seconds as f64 / 3600.0);
    match hours.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn month_first_and_year_first_agree() {
        assert_eq!(parse_date("10/24/2019"), Some(date(2019, 10, 24)));
        assert_eq!(parse_date("10/24/2019"), parse_date("2019-10-24"));
        assert_eq!(parse_date(" 1-2-2019 "), Some(date(2019, 1, 2)));
        assert_eq!(parse_date("2019/1/2"), Some(date(2019, 1, 2)));
    }

    #[test]
    fn two_digit_years_pivot() {
        assert_eq!(parse_date("1/2/17"), Some(date(2017, 1, 2)));
        assert_eq!(parse_date("1/2/68"), Some(date(2068, 1, 2)));
        assert_eq!(parse_date("1/2/69"), Some(date(1969, 1, 2)));
        assert_eq!(parse_date("12/31/99"), Some(date(1999, 12, 31)));
    }

    #[test]
    fn rejects_missing_malformed_and_impossible_dates() {
        for text in ["", "MD", "201-10-24", "1/2/201", "24.10.2019", "2/30/2019", "13/1/2019"] {
            assert_eq!(parse_date(text), None, "{text:?}");
        }
    }

    #[test]
    fn parses_date_and_time_of_day() {
        let parsed = parse_datetime("01/2/2019", "2:00 pm").expect("date-time");
        assert_eq!(parsed.to_string(), "2019-01-02 14:00:00");
        let parsed = parse_datetime("1-2-2019", "12:05am").expect("date-time");
        assert_eq!(parsed.to_string(), "2019-01-02 00:05:00");
        let parsed = parse_datetime("1/2/2019 ", "  12:30   PM").expect("date-time");
        assert_eq!(parsed.to_string(), "2019-01-02 12:30:00");
    }

    #[test]
    fn unparsable_date_time_is_an_error() {
        let error = parse_datetime("foo", "bar").expect_err("not a date-time");
        assert_eq!(error.input, "FOO BAR");
        assert!(parse_datetime("1/2/2019", "14:00").is_err());
        assert!(parse_datetime("1/2/2019", "13:00 pm").is_err());
        assert!(parse_datetime("2/30/2019", "1:00 pm").is_err());
    }

    #[test]
    fn hour_differences_keep_two_decimals() {
        let from = parse_datetime("01/2/2019", "2:00 pm").expect("from");
        let to = parse_datetime("01/2/2019", "4:38 pm").expect("to");
        let much_later = parse_datetime("1/9/2019", "10:11 am").expect("much later");
        let whole_hour = parse_datetime("1/2/2019", "3:00 pm").expect("whole hour");

        assert_eq!(diff_hours(from, to), "2.63");
        assert_eq!(diff_hours(to, from), "-2.63");
        assert_eq!(diff_hours(from, much_later), "164.18");
        assert_eq!(diff_hours(from, whole_hour), "1.00");
    }

    #[test]
    fn hour_ties_round_to_even_and_zero_is_unsigned() {
        let base = parse_datetime("1/2/2019", "2:00 pm").expect("base");
        let seconds = |n: i64| base + chrono::Duration::seconds(n);

        assert_eq!(diff_hours(base, seconds(450)), "0.12");
        assert_eq!(diff_hours(base, seconds(1350)), "0.38");
        assert_eq!(diff_hours(seconds(450), base), "-0.12");
        assert_eq!(diff_hours(seconds(10), base), "0.00");
        assert_eq!(diff_hours(base, seconds(10)), "0.00");
        assert_eq!(diff_hours(seconds(18), base), "-0.01");
    }

    #[test]
    fn day_differences_keep_sign() {
        assert_eq!(diff_days(date(2019, 1, 2), date(2019, 1, 9)), 7);
        assert_eq!(diff_days(date(2019, 1, 9), date(2019, 1, 2)), -7);
        assert_eq!(diff_days(date(2019, 12, 31), date(2020, 3, 1)), 61);
    }

    proptest! {
        #[test]
        fn hour_differences_are_antisymmetric(a in 0i64..100_000_000, b in 0i64..100_000_000) {
            let base = date(2000, 1, 1).and_hms_opt(0, 0, 0).expect("midnight");
            let from = base + chrono::Duration::seconds(a);
            let to = base + chrono::Duration::seconds(b);
            let forward = diff_hours(from, to);
            let backward = diff_hours(to, from);
            if forward == "0.00" || backward == "0.00" {
                prop_assert_eq!(forward, "0.00");
                prop_assert_eq!(backward, "0.00");
            } else if b > a {
                prop_assert_eq!(backward, format!("-{forward}"));
            } else {
                prop_assert_eq!(forward, format!("-{backward}"));
            }
        }
    }
}
