// ============================================================================
// Numeric Module
// Double-precision helpers shared by the evaluator and the formatters
// ============================================================================
//
// This module provides:
// - EngineError: Error type for configuration and input decoding
// - parse_display_value: total parser from entry text to f64
// - round_committed: epsilon-biased rounding applied on every commit
// - guarded_divide: division mapping every zero divisor to +infinity
//
// Design principles:
// - Parsing never fails; NaN and infinity are one "not finite" class
// - Arithmetic errors are display sentinels, not Rust errors

mod arithmetic;
mod errors;

pub use arithmetic::{
    guarded_divide, is_editable_entry, parse_display_value, round_committed,
    DEFAULT_ROUNDING_DIGITS,
};
pub use errors::{EngineError, EngineResult};
