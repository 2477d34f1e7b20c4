//! Locale-independent number formatting.

/// Placeholder rendered for values that cannot be shown as numbers.
pub const NOT_AVAILABLE: &str = "N/A";

/// Round to an integer and insert `,` every three digits.
///
/// Rounds half away from zero. Non-finite input renders as `N/A`.
///
/// ```
/// use noisebench_report::group_thousands;
///
/// assert_eq!(group_thousands(1_024_000.0), "1,024,000");
/// assert_eq!(group_thousands(999.5), "1,000");
/// assert_eq!(group_thousands(f64::NAN), "N/A");
/// ```
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.round();
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimal places, or `N/A` for non-finite input.
pub fn fixed2(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(7.0), "7");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(12_345.0), "12,345");
        assert_eq!(group_thousands(123_456.0), "123,456");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
        assert_eq!(group_thousands(1_024_000.0), "1,024,000");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(group_thousands(2.5), "3");
        assert_eq!(group_thousands(2.4999), "2");
        assert_eq!(group_thousands(1999.5), "2,000");
        assert_eq!(group_thousands(-2.5), "-3");
    }

    #[test]
    fn negatives_and_negative_zero() {
        assert_eq!(group_thousands(-1_234.0), "-1,234");
        assert_eq!(group_thousands(-0.4), "0");
        assert_eq!(group_thousands(-0.0), "0");
    }

    #[test]
    fn non_finite_is_not_available() {
        assert_eq!(group_thousands(f64::NAN), "N/A");
        assert_eq!(group_thousands(f64::INFINITY), "N/A");
        assert_eq!(group_thousands(f64::NEG_INFINITY), "N/A");
        assert_eq!(fixed2(f64::NAN), "N/A");
    }

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(fixed2(500.0), "500.00");
        assert_eq!(fixed2(12.3456), "12.35");
        assert_eq!(fixed2(0.004), "0.00");
    }

    proptest! {
        #[test]
        fn stripping_commas_recovers_the_integer(n in 0u64..1_000_000_000_000) {
            let s = group_thousands(n as f64);
            prop_assert_eq!(s.replace(',', ""), n.to_string());
            for group in s.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
