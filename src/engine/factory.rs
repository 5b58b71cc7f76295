// ============================================================================
// Calculator Factory
// Creates calculator sessions with proper configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::{Calculator, Evaluator};
use crate::format::{Locale, Notation};
use crate::interfaces::{EventHandler, NoOpEventHandler, NumberFormatter};
use crate::numeric::EngineResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for session events
///
/// # Returns
/// * `EngineResult<Calculator>` - Configured calculator or error
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::european();
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.display(), "0");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> EngineResult<Calculator> {
    Calculator::with_config(config, event_handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut calc = CalculatorBuilder::new()
///     .with_locale(Locale::DE_DE)
///     .with_rounding_digits(10)
///     .with_event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.run_script("1000 * 3 =").unwrap(), "3.000");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    formatter: Option<Arc<dyn NumberFormatter>>,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    /// Start from the standard configuration
    pub fn new() -> Self {
        Self::from_config(CalculatorConfig::standard())
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            formatter: None,
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Display Configuration
    // ========================================================================

    /// Set display locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Set exponential notation thresholds
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.config.notation = notation;
        self
    }

    /// Replace the display formatter entirely.
    ///
    /// Committed entries still follow the configured notation; only the
    /// display projection goes through this formatter.
    pub fn with_formatter(mut self, formatter: Arc<dyn NumberFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    // ========================================================================
    // Evaluation Configuration
    // ========================================================================

    /// Set commit rounding precision
    pub fn with_rounding_digits(mut self, digits: u32) -> Self {
        self.config.rounding_digits = digits;
        self
    }

    /// Set event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self) -> EngineResult<Calculator> {
        self.config.validate()?;

        let formatter = match self.formatter {
            Some(formatter) => formatter,
            None => Arc::new(self.config.formatter()),
        };

        Ok(Calculator::from_parts(
            Evaluator::new(self.config),
            formatter,
            self.event_handler,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
