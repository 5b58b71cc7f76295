// ============================================================================
// Number Formatter Interface
// The locale-aware formatting primitive consumed by the controller
// ============================================================================

use crate::format::{render_entry, render_number, Locale, Notation};
use crate::numeric::parse_display_value;

/// Strategy interface for turning engine values into display text.
///
/// Implementations must be pure: formatting may be called any number of
/// times for the same state and must return the same text.
pub trait NumberFormatter: Send + Sync {
    /// Render a committed numeric value
    fn format_number(&self, value: f64) -> String;

    /// Render a raw entry buffer, preserving partially typed digits
    fn format_entry(&self, entry: &str) -> String;

    /// Parse text produced by `format_number` back into a value.
    ///
    /// Returns `NaN` for anything that is not a number.
    fn parse(&self, display: &str) -> f64;

    /// Formatter name for logging
    fn name(&self) -> &str;
}

/// Formatter driven by a `Locale` and a `Notation`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocaleFormatter {
    locale: Locale,
    notation: Notation,
}

impl LocaleFormatter {
    pub fn new(locale: Locale, notation: Notation) -> Self {
        Self { locale, notation }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }
}

impl NumberFormatter for LocaleFormatter {
    fn format_number(&self, value: f64) -> String {
        render_number(value, &self.locale, &self.notation)
    }

    fn format_entry(&self, entry: &str) -> String {
        render_entry(entry, &self.locale)
    }

    fn parse(&self, display: &str) -> f64 {
        parse_display_value(&self.locale.delocalize(display))
    }

    fn name(&self) -> &str {
        "locale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        let formatter = LocaleFormatter::default();
        assert_eq!(formatter.format_number(1234.5), "1,234.5");
        assert_eq!(formatter.format_entry("1234."), "1,234.");
        assert_eq!(formatter.parse("1,234.5"), 1234.5);
    }

    #[test]
    fn test_german_round_trip() {
        let formatter = LocaleFormatter::new(Locale::DE_DE, Notation::STANDARD);
        let shown = formatter.format_number(-1234567.25);
        assert_eq!(shown, "-1.234.567,25");
        assert_eq!(formatter.parse(&shown), -1234567.25);
        assert_eq!(formatter.format_number(formatter.parse(&shown)), shown);
    }

    #[test]
    fn test_parse_sentinel_is_nan() {
        let formatter = LocaleFormatter::default();
        assert!(formatter.parse("Cannot divide by zero").is_nan());
    }
}
