// ============================================================================
// Number Formatting
// Committed values to display text
// ============================================================================

use super::Locale;
use crate::domain::DIVIDE_BY_ZERO;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When to switch from positional to exponential notation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notation {
    /// Magnitudes at or above this render exponentially
    pub upper: f64,
    /// Non-zero magnitudes below this render exponentially
    pub lower: f64,
    /// Fractional digits of the exponential mantissa
    pub fraction_digits: usize,
}

impl Notation {
    pub const STANDARD: Self = Self {
        upper: 1e12,
        lower: 1e-9,
        fraction_digits: 6,
    };

    pub fn uses_exponent(&self, value: f64) -> bool {
        let magnitude = value.abs();
        magnitude != 0.0 && (magnitude >= self.upper || magnitude < self.lower)
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Render a value for display.
///
/// Non-finite values become the divide-by-zero sentinel. Large and tiny
/// magnitudes use normalized exponential notation (`1.234568e12`, never an
/// explicit `+`). Everything else groups the integer part and appends the
/// fractional digits exactly as they are: rounding already happened when
/// the value was committed.
pub fn render_number(value: f64, locale: &Locale, notation: &Notation) -> String {
    if !value.is_finite() {
        return DIVIDE_BY_ZERO.to_string();
    }

    if notation.uses_exponent(value) {
        let raw = format!("{:.*e}", notation.fraction_digits, value);
        return locale.localize_decimal(&raw);
    }

    // f64's Display is positional and round-trips with the fewest digits
    let positional = value.abs().to_string();
    let (int_digits, frac_digits) = match positional.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (positional.as_str(), None),
    };

    let mut out = String::with_capacity(positional.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&locale.group_digits(int_digits));
    if let Some(frac) = frac_digits {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Render a value with en-US grouping and the standard notation thresholds.
pub fn format_number(value: f64) -> String {
    render_number(value, &Locale::EN_US, &Notation::STANDARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::parse_display_value;
    use proptest::prelude::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(-42.5), "-42.5");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(999999999999.0), "999,999,999,999");
    }

    #[test]
    fn test_fraction_is_not_rounded_again() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000000001), "0.000000001");
    }

    #[test]
    fn test_exponential_notation() {
        assert_eq!(format_number(1e12), "1.000000e12");
        assert_eq!(format_number(1234567890123.0), "1.234568e12");
        assert_eq!(format_number(-2.5e15), "-2.500000e15");
        assert_eq!(format_number(5e-10), "5.000000e-10");
    }

    #[test]
    fn test_non_finite_is_sentinel() {
        assert_eq!(format_number(f64::INFINITY), DIVIDE_BY_ZERO);
        assert_eq!(format_number(f64::NEG_INFINITY), DIVIDE_BY_ZERO);
        assert_eq!(format_number(f64::NAN), DIVIDE_BY_ZERO);
    }

    #[test]
    fn test_localized_rendering() {
        let notation = Notation::STANDARD;
        assert_eq!(
            render_number(1234.5, &Locale::DE_DE, &notation),
            "1.234,5"
        );
        assert_eq!(render_number(1234.5, &Locale::RAW, &notation), "1234.5");
        assert_eq!(render_number(2e13, &Locale::DE_DE, &notation), "2,000000e13");
    }

    #[test]
    fn test_custom_notation() {
        let notation = Notation {
            upper: 1e6,
            lower: 1e-3,
            fraction_digits: 2,
        };
        assert_eq!(render_number(2_500_000.0, &Locale::EN_US, &notation), "2.50e6");
        assert_eq!(render_number(999_999.0, &Locale::EN_US, &notation), "999,999");
        assert_eq!(render_number(0.0004, &Locale::EN_US, &notation), "4.00e-4");
    }

    proptest! {
        #[test]
        fn prop_format_is_idempotent(value in -1e15f64..1e15f64) {
            let once = format_number(value);
            let twice = format_number(parse_display_value(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_never_contains_plus(value in any::<f64>()) {
            prop_assert!(!format_number(value).contains('+'));
        }
    }
}
