use account_model::{FieldDef, FormatRule, RangeRule, column_name};
use proptest::prelude::*;

const YES_NO: FieldDef = FieldDef::new("PRIOR_MI", "Prior MI", FormatRule::YesNoNa);

fn column_index(name: &str) -> usize {
    name.bytes()
        .fold(0, |acc, byte| acc * 26 + usize::from(byte - b'A' + 1))
}

#[test]
fn yes_no_fields_accept_flags_and_missing() {
    for value in ["Y", "N", "NA", "MD"] {
        assert!(YES_NO.validate(value), "{value}");
    }
    assert!(!YES_NO.validate("maybe"));
    assert!(!YES_NO.validate("Yes"));
}

proptest! {
    #[test]
    fn bounds_are_inclusive(lo in 0u32..1000, width in 1u32..1000) {
        let lo = f64::from(lo);
        let hi = lo + f64::from(width);
        let field = FieldDef::new("X", "X", FormatRule::Decimal).bounded(lo, hi);
        let eps = 0.01;
        prop_assert_eq!(field.test_range(&lo.to_string()), Some(Ok(true)));
        prop_assert_eq!(field.test_range(&hi.to_string()), Some(Ok(true)));
        prop_assert_eq!(field.test_range(&format!("{:.2}", hi + eps)), Some(Ok(false)));
        if lo >= eps {
            prop_assert_eq!(field.test_range(&format!("{:.2}", lo - eps)), Some(Ok(false)));
        }
        prop_assert_eq!(field.test_range("MD"), None);
    }

    #[test]
    fn column_names_are_bijective(column in 1usize..20_000) {
        let name = column_name(column);
        prop_assert!(name.bytes().all(|byte| byte.is_ascii_uppercase()));
        prop_assert_eq!(column_index(&name), column);
    }
}

#[test]
fn min_only_has_no_upper_bound() {
    let rule = RangeRule::MinOnly { lo: 18.0 };
    assert_eq!(rule.test("18"), Ok(true));
    assert_eq!(rule.test("17.99"), Ok(false));
    assert_eq!(rule.test("120"), Ok(true));
}
