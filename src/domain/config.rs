// ============================================================================
// Calculator Configuration
// Rounding, notation and locale settings for a calculator session
// ============================================================================

use crate::format::{Locale, Notation};
use crate::interfaces::LocaleFormatter;
use crate::numeric::{EngineError, EngineResult, DEFAULT_ROUNDING_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest rounding precision that still leaves f64 headroom for the integer part
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Longest exponential mantissa f64 can carry meaningfully
pub const MAX_EXPONENT_DIGITS: usize = 17;

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration shared by the evaluator and the display projection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Separators used when rendering the display string
    pub locale: Locale,

    /// Thresholds for switching to exponential notation
    pub notation: Notation,

    /// Decimal places kept when a result is committed
    pub rounding_digits: u32,
}

impl CalculatorConfig {
    pub fn new(locale: Locale, notation: Notation, rounding_digits: u32) -> Self {
        Self {
            locale,
            notation,
            rounding_digits,
        }
    }

    /// Builder method: Set display locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builder method: Set exponential notation thresholds
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builder method: Set commit rounding precision
    pub fn with_rounding_digits(mut self, digits: u32) -> Self {
        self.rounding_digits = digits;
        self
    }

    /// Formatter for the display projection of this configuration
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(self.locale, self.notation)
    }

    /// Validate the configuration
    pub fn validate(&self) -> EngineResult<()> {
        if self.rounding_digits == 0 || self.rounding_digits > MAX_ROUNDING_DIGITS {
            return Err(EngineError::InvalidConfig(format!(
                "rounding digits must be between 1 and {}",
                MAX_ROUNDING_DIGITS
            )));
        }

        let Notation {
            upper,
            lower,
            fraction_digits,
        } = self.notation;

        if !(lower > 0.0 && upper.is_finite() && lower < upper) {
            return Err(EngineError::InvalidConfig(
                "notation thresholds must satisfy 0 < lower < upper".to_string(),
            ));
        }

        if fraction_digits > MAX_EXPONENT_DIGITS {
            return Err(EngineError::InvalidConfig(format!(
                "exponential digits cannot exceed {}",
                MAX_EXPONENT_DIGITS
            )));
        }

        if let Some(group) = self.locale.group_separator {
            if group == self.locale.decimal_separator {
                return Err(EngineError::InvalidConfig(
                    "group and decimal separators must differ".to_string(),
                ));
            }
            if group.is_ascii_digit() || group == '-' {
                return Err(EngineError::InvalidConfig(format!(
                    "{:?} cannot be used as a group separator",
                    group
                )));
            }
        }

        if self.locale.decimal_separator.is_ascii_digit() || self.locale.decimal_separator == '-'
        {
            return Err(EngineError::InvalidConfig(format!(
                "{:?} cannot be used as a decimal separator",
                self.locale.decimal_separator
            )));
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Pocket-calculator defaults
    /// - en-US separators
    /// - 12 decimal places on commit
    /// - exponential outside [1e-9, 1e12)
    pub fn standard() -> Self {
        Self::new(Locale::EN_US, Notation::STANDARD, DEFAULT_ROUNDING_DIGITS)
    }

    /// Standard behavior with German separators (1.234,5)
    pub fn european() -> Self {
        Self::standard().with_locale(Locale::DE_DE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();

        assert_eq!(config.locale, Locale::EN_US);
        assert_eq!(config.rounding_digits, 12);
        assert_eq!(config.notation.upper, 1e12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::standard()
            .with_locale(Locale::FR_FR)
            .with_rounding_digits(10);

        assert_eq!(config.locale, Locale::FR_FR);
        assert_eq!(config.rounding_digits, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::standard().with_rounding_digits(0);
        assert!(config.validate().is_err());

        let config = CalculatorConfig::standard().with_rounding_digits(16);
        assert!(config.validate().is_err());

        let config = CalculatorConfig::standard().with_notation(Notation {
            upper: 1e-3,
            lower: 1e3,
            fraction_digits: 6,
        });
        assert!(config.validate().is_err());

        let config = CalculatorConfig::standard().with_locale(Locale::new(Some('.'), '.'));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_preset_configs() {
        let european = CalculatorConfig::european();
        assert_eq!(european.locale, Locale::DE_DE);
        assert_eq!(european.formatter().locale(), &Locale::DE_DE);
        assert!(european.validate().is_ok());
    }
}
