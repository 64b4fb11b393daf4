//! Display formatting for calculator values
//!
//! Turns the raw text of an operand or result into what the display shows:
//! thousands grouping, trailing-zero trimming, and exponential notation for
//! values too long or too small for the screen.

use crate::core::{Value, ERROR_MARKER};

/// Maximum number of integer digits before switching to exponential form
pub const MAX_INTEGER_DIGITS: usize = 9;

/// Mantissa decimals used in exponential form (`1.23450e+10`)
pub const EXPONENT_PRECISION: usize = 5;

/// Non-zero magnitudes below this are shown in exponential form
pub const SMALL_MAGNITUDE: f64 = 1e-6;

/// Separator inserted between groups of three integer digits
pub const GROUP_SEPARATOR: char = ',';

/// Formats raw display text.
///
/// The error marker, the literal `"0"` and text already in exponential form
/// are returned unchanged. Grouping separators in the input are ignored, so
/// `format(&format(x)) == format(x)`.
#[must_use]
pub fn format(raw: &str) -> String {
    if raw == ERROR_MARKER || raw == "0" || is_exponential(raw) {
        return raw.to_string();
    }

    let (negative, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (integer, decimal) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let integer: String = integer.chars().filter(|&c| c != GROUP_SEPARATOR).collect();

    let sign = if negative { "-" } else { "" };
    let Ok(value) = format!("{sign}{integer}.{decimal}").parse::<f64>() else {
        return raw.to_string();
    };

    if integer.len() > MAX_INTEGER_DIGITS {
        return to_exponential(value, EXPONENT_PRECISION);
    }
    if value != 0.0 && value.abs() < SMALL_MAGNITUDE {
        return to_exponential(value, EXPONENT_PRECISION);
    }

    let decimal = decimal.trim_end_matches('0');
    let mut out = String::from(sign);
    if integer.len() >= 4 && decimal.len() <= 3 {
        out.push_str(&group_thousands(&integer));
    } else {
        out.push_str(&integer);
    }
    if !decimal.is_empty() {
        out.push('.');
        out.push_str(decimal);
    }
    out
}

/// Formats a number: canonical shortest text, then [`format`]
#[must_use]
pub fn format_number(n: f64) -> String {
    format(&number_to_raw(n))
}

/// Formats an arithmetic outcome
#[must_use]
pub fn format_value(value: Value) -> String {
    match value {
        Value::Number(n) => format_number(n),
        Value::Error => ERROR_MARKER.to_string(),
    }
}

/// Canonical raw text of a number: shortest round-trip digits, never in
/// exponential form, negative zero collapsed to `"0"`.
#[must_use]
pub fn number_to_raw(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}

/// Counts the digits of an entry, ignoring sign, point and separators
#[must_use]
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

/// Returns true when `raw` parses as a finite number
#[must_use]
pub fn is_valid_number(raw: &str) -> bool {
    raw.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Enough significant digits to write any finite `f64` exactly
const EXACT_DIGITS: usize = 800;

/// Exponential notation with a fixed number of mantissa decimals and an
/// explicit exponent sign.
///
/// Rounds on the exact binary value; an exact half rounds away from zero,
/// so `1000005000` becomes `1.00001e+9`.
#[must_use]
pub fn to_exponential(n: f64, precision: usize) -> String {
    if !n.is_finite() {
        return format!("{n}");
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, n.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return exact;
    };

    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let (kept, dropped) = digits.split_at((precision + 1).min(digits.len()));
    let mut kept = kept.to_vec();
    if dropped.first().is_some_and(|&d| d >= 5) && increment(&mut kept) {
        exponent += 1;
    }

    let mut out = String::with_capacity(precision + 8);
    if n.is_sign_negative() && n != 0.0 {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == 1 {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
    out
}

/// Adds one in the last place; returns true when the carry ran off the
/// front and the digits became `100..0`
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    if let Some(first) = digits.first_mut() {
        *first = 1;
    }
    true
}

fn is_exponential(raw: &str) -> bool {
    raw.contains('e')
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Pass-through =====

    #[test]
    fn test_error_marker_passes_through() {
        assert_eq!(format(ERROR_MARKER), "Error");
    }

    #[test]
    fn test_zero_passes_through() {
        assert_eq!(format("0"), "0");
    }

    #[test]
    fn test_exponential_passes_through() {
        assert_eq!(format("1.23450e+10"), "1.23450e+10");
        assert_eq!(format("-1.00000e-7"), "-1.00000e-7");
    }

    // ===== Plain numbers =====

    #[test]
    fn test_small_integers_unchanged() {
        assert_eq!(format("7"), "7");
        assert_eq!(format("999"), "999");
        assert_eq!(format("-42"), "-42");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format("1234"), "1,234");
        assert_eq!(format("123456"), "123,456");
        assert_eq!(format("1234567"), "1,234,567");
        assert_eq!(format("123456789"), "123,456,789");
        assert_eq!(format("-1234567"), "-1,234,567");
    }

    #[test]
    fn test_grouping_with_short_decimal() {
        assert_eq!(format("1234.5"), "1,234.5");
        assert_eq!(format("1234.567"), "1,234.567");
    }

    #[test]
    fn test_no_grouping_with_long_decimal() {
        assert_eq!(format("1234.5678"), "1234.5678");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format("1.50"), "1.5");
        assert_eq!(format("2.000"), "2");
        assert_eq!(format("1234.5000"), "1,234.5");
    }

    #[test]
    fn test_dangling_point_dropped() {
        assert_eq!(format("5."), "5");
        assert_eq!(format("0."), "0");
        assert_eq!(format("-0."), "-0");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format("0.05"), "0.05");
        assert_eq!(format("-0.25"), "-0.25");
        assert_eq!(format("0.000001"), "0.000001");
    }

    // ===== Exponential =====

    #[test]
    fn test_long_integer_uses_exponential() {
        assert_eq!(format("12345000000"), "1.23450e+10");
        assert_eq!(format("1000000000"), "1.00000e+9");
        assert_eq!(format("-12345000000"), "-1.23450e+10");
    }

    #[test]
    fn test_tiny_value_uses_exponential() {
        assert_eq!(format("0.0000001"), "1.00000e-7");
        assert_eq!(format("-0.00000012345"), "-1.23450e-7");
    }

    #[test]
    fn test_zero_decimal_is_not_tiny() {
        assert_eq!(format("0.000"), "0");
    }

    #[test]
    fn test_grouped_input_is_regrouped() {
        assert_eq!(format("1,234"), "1,234");
        assert_eq!(format("1,234,567.5"), "1,234,567.5");
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        assert_eq!(format("-"), "-");
        assert_eq!(format(""), "");
    }

    // ===== Helpers =====

    #[test]
    fn test_number_to_raw() {
        assert_eq!(number_to_raw(15.0), "15");
        assert_eq!(number_to_raw(0.05), "0.05");
        assert_eq!(number_to_raw(-0.0), "0");
        assert_eq!(number_to_raw(1e21), "1000000000000000000000");
        assert_eq!(number_to_raw(1e-7), "0.0000001");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(1e21), "1.00000e+21");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Value::Number(1234.0)), "1,234");
        assert_eq!(format_value(Value::Error), ERROR_MARKER);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("0."), 1);
        assert_eq!(digit_count("1,234"), 4);
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("12"));
        assert!(is_valid_number("-0.5"));
        assert!(is_valid_number("5."));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("inf"));
        assert!(!is_valid_number("NaN"));
        assert!(!is_valid_number(""));
    }

    #[test]
    fn test_to_exponential_sign() {
        assert_eq!(to_exponential(1.5, 5), "1.50000e+0");
        assert_eq!(to_exponential(0.015, 2), "1.50e-2");
        assert_eq!(to_exponential(-2.5e-8, 5), "-2.50000e-8");
        assert_eq!(to_exponential(0.0, 5), "0.00000e+0");
    }

    #[test]
    fn test_to_exponential_half_rounds_up() {
        assert_eq!(to_exponential(1_000_005_000.0, 5), "1.00001e+9");
        assert_eq!(to_exponential(12_345_650_000.0, 5), "1.23457e+10");
        assert_eq!(to_exponential(-12_345_650_000.0, 5), "-1.23457e+10");
        assert_eq!(to_exponential(25.0, 0), "3e+1");
    }

    #[test]
    fn test_to_exponential_below_half_rounds_down() {
        assert_eq!(to_exponential(1_000_004_999.0, 5), "1.00000e+9");
    }

    #[test]
    fn test_to_exponential_carry_bumps_exponent() {
        assert_eq!(to_exponential(9_999_995_000.0, 5), "1.00000e+10");
        assert_eq!(to_exponential(9.5, 0), "1e+1");
    }

    #[test]
    fn test_format_half_rounds_up() {
        assert_eq!(format("1000005000"), "1.00001e+9");
        assert_eq!(format("12345650000"), "1.23457e+10");
    }

    // ===== Properties =====

    proptest! {
        #[test]
        fn prop_format_idempotent(raw in "-?[0-9]{1,12}(\\.[0-9]{0,9})?") {
            let once = format(&raw);
            prop_assert_eq!(format(&once), once);
        }

        #[test]
        fn prop_format_number_idempotent(n in -1e15f64..1e15f64) {
            let once = format_number(n);
            prop_assert_eq!(format(&once), once);
        }

        #[test]
        fn prop_format_never_has_trailing_zero_decimal(raw in "[1-9][0-9]{0,5}\\.[0-9]{1,3}0") {
            let out = format(&raw);
            prop_assert!(!(out.contains('.') && out.ends_with('0')));
        }
    }
}
