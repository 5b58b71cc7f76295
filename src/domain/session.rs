// ============================================================================
// Session State
// The evaluator's entire arithmetic state
// ============================================================================

use super::Operator;
use crate::numeric::{is_editable_entry, parse_display_value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel committed for any non-finite result
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Sentinel for the square root of a negative number
pub const INVALID_INPUT: &str = "Invalid input";

/// Check whether a string is one of the error sentinels.
pub fn is_error_sentinel(entry: &str) -> bool {
    entry == DIVIDE_BY_ZERO || entry == INVALID_INPUT
}

/// Immutable snapshot of one calculator session.
///
/// The entry buffer is the only place the current value lives; the numeric
/// value is always derived from it on read. Fields change only through the
/// evaluator (`engine::apply`), which keeps the stored operand and pending
/// operator paired.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionState {
    pub(crate) entry: String,
    pub(crate) awaiting_operand: bool,
    pub(crate) stored_operand: Option<f64>,
    pub(crate) pending_operator: Option<Operator>,
    /// Right-hand operand of the last `=`, replayed by a repeated `=`
    pub(crate) last_operand: Option<f64>,
}

impl SessionState {
    /// Fresh session: `"0"`, no chain, not awaiting an operand.
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            awaiting_operand: false,
            stored_operand: None,
            pending_operator: None,
            last_operand: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw, unformatted entry buffer
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn stored_operand(&self) -> Option<f64> {
        self.stored_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Operand a repeated `=` would re-apply, if the last action completed one.
    pub fn repeat_operand(&self) -> Option<f64> {
        self.last_operand
    }

    /// Numeric value of the entry; `NaN` while an error sentinel is shown.
    pub fn current_value(&self) -> f64 {
        parse_display_value(&self.entry)
    }

    /// Current value for memory arithmetic, with `NaN` coerced to zero.
    pub fn memory_value(&self) -> f64 {
        let value = self.current_value();
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    pub fn is_error(&self) -> bool {
        is_error_sentinel(&self.entry)
    }

    /// Whether digits typed now extend the entry instead of replacing it.
    pub fn is_editing(&self) -> bool {
        !self.awaiting_operand && is_editable_entry(&self.entry)
    }

    pub fn has_pending_operation(&self) -> bool {
        self.stored_operand.is_some() && self.pending_operator.is_some()
    }

    // ========================================================================
    // Transitions shared by the evaluator
    // ========================================================================

    /// Drop the operator chain.
    pub(crate) fn clear_chain(&mut self) {
        self.stored_operand = None;
        self.pending_operator = None;
        self.last_operand = None;
    }

    /// Enter an error sentinel, abandoning the chain.
    pub(crate) fn enter_error(&mut self, sentinel: &str) {
        self.entry = sentinel.to_string();
        self.awaiting_operand = false;
        self.clear_chain();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
