// ============================================================================
// Calculator Engine Library
// Pocket-calculator input handling and evaluation as a pure state machine
// ============================================================================

//! # Calc Engine
//!
//! The input-and-evaluation core of a pocket calculator.
//!
//! ## Features
//!
//! - **Pure reducer** `apply(action, state) -> state` over an immutable session record
//! - **Operator chaining** with repeat-equals and percent-of-operand semantics
//! - **Commit rounding** that hides binary floating-point residue (`0.1 + 0.2 = 0.3`)
//! - **Recoverable error sentinels** instead of panics or `Result`s
//! - **Memory bank** with store / recall / add / subtract
//! - **Locale-aware display** projection with exponential fallback
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! let mut calc = Calculator::new();
//!
//! calc.press(Action::Digit(2));
//! calc.press(Operator::Add);
//! calc.press(Action::Digit(3));
//! assert_eq!(calc.press(Action::Equals), "5");
//!
//! // Repeated `=` re-applies "+ 3"
//! assert_eq!(calc.press(Action::Equals), "8");
//!
//! // Scripts replay key sequences
//! assert_eq!(calc.run_script("C 200 + 10 % =").unwrap(), "220");
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        parse_script, Action, CalculatorConfig, DisplaySnapshot, Input, MemoryAction, MemoryBank,
        MemoryEntry, MemoryEntryId, Operator, SessionState, DIVIDE_BY_ZERO, INVALID_INPUT,
    };
    pub use crate::engine::{
        apply, create_from_config, memory_add, memory_clear, memory_recall, memory_store,
        memory_subtract, memory_toggle_view, Calculator, CalculatorBuilder, Evaluator,
    };
    pub use crate::format::{format_entry_for_display, format_number, Locale, Notation};
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LocaleFormatter, LoggingEventHandler, NoOpEventHandler,
        NumberFormatter, RecordingEventHandler,
    };
    pub use crate::numeric::{parse_display_value, EngineError, EngineResult};
}
