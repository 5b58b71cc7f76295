// ============================================================================
// Evaluator
// The action -> state transition function of a calculator session
// ============================================================================

use crate::domain::{
    Action, CalculatorConfig, MemoryBank, Operator, SessionState, DIVIDE_BY_ZERO, INVALID_INPUT,
};
use crate::format::{render_number, Locale};
use crate::numeric::{guarded_divide, is_editable_entry, round_committed};

/// Pure reducer over `SessionState`.
///
/// Every transition of `awaiting_operand` happens in here. The evaluator
/// itself holds only configuration, so one instance can drive any number of
/// sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    config: CalculatorConfig,
}

impl Evaluator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Apply one action, returning the next state.
    ///
    /// Total: actions that make no sense in the current state (an operator
    /// on an error sentinel, `=` with nothing pending) return the state
    /// unchanged.
    pub fn apply(&self, action: Action, state: SessionState) -> SessionState {
        let mut next = state;

        match action {
            Action::Digit(digit) => Self::enter_digit(&mut next, digit),
            Action::Decimal => Self::enter_decimal(&mut next),
            Action::Operator(op) => self.press_operator(&mut next, op),
            Action::Equals => self.press_equals(&mut next),
            Action::Percent => self.press_percent(&mut next),
            Action::ClearEntry => {
                next.entry = "0".to_string();
                next.awaiting_operand = true;
            },
            Action::ClearAll => next = SessionState::new(),
            Action::Backspace => Self::backspace(&mut next),
            Action::Negate | Action::Reciprocal | Action::Square | Action::SquareRoot => {
                self.apply_unary(&mut next, action)
            },
        }

        tracing::trace!(
            "Applied {:?}: entry={:?} awaiting={} stored={:?} pending={:?}",
            action,
            next.entry,
            next.awaiting_operand,
            next.stored_operand,
            next.pending_operator
        );

        next
    }

    /// Commit the memory head into the entry.
    ///
    /// Empty banks leave the state untouched.
    pub fn recall(&self, bank: &MemoryBank, state: SessionState) -> SessionState {
        let mut next = state;

        if let Some(head) = bank.head() {
            self.commit(&mut next, head.value);
            next.awaiting_operand = true;
        }

        next
    }

    // ========================================================================
    // Entry editing
    // ========================================================================

    fn enter_digit(state: &mut SessionState, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            tracing::trace!("Ignoring out-of-range digit {}", digit);
            return;
        };

        if !state.is_editing() {
            state.entry = c.to_string();
            state.awaiting_operand = false;
        } else if state.entry == "0" {
            state.entry = c.to_string();
        } else {
            state.entry.push(c);
        }
    }

    fn enter_decimal(state: &mut SessionState) {
        if !state.is_editing() {
            state.entry = "0.".to_string();
            state.awaiting_operand = false;
        } else if !state.entry.contains('.') {
            state.entry.push('.');
        }
    }

    fn backspace(state: &mut SessionState) {
        if !is_editable_entry(&state.entry) || state.entry.len() <= 1 {
            state.entry = "0".to_string();
            return;
        }

        state.entry.pop();
        if state.entry.is_empty() || state.entry == "-" {
            state.entry = "0".to_string();
        }
    }

    // ========================================================================
    // Binary operations
    // ========================================================================

    fn press_operator(&self, state: &mut SessionState, op: Operator) {
        let current = state.current_value();
        if !current.is_finite() {
            return;
        }

        // Repeat-`=` ends once a new operator is chosen
        state.last_operand = None;

        match (state.stored_operand, state.pending_operator) {
            (Some(stored), Some(pending)) => {
                if !state.awaiting_operand {
                    let result = pending.perform(stored, current);
                    self.commit(state, result);
                    if !result.is_finite() {
                        // Error commit dropped the chain; the new operator goes with it
                        return;
                    }
                    state.stored_operand = Some(result);
                }
            },
            _ => state.stored_operand = Some(current),
        }

        state.pending_operator = Some(op);
        state.awaiting_operand = true;
    }

    fn press_equals(&self, state: &mut SessionState) {
        let (Some(stored), Some(op)) = (state.stored_operand, state.pending_operator) else {
            return;
        };

        let current = state.current_value();
        if !current.is_finite() {
            return;
        }

        // Repeated `=` re-applies the previous right operand to the result
        let (left, right) = match state.last_operand {
            Some(repeat) => (current, repeat),
            None => (stored, current),
        };

        let result = op.perform(left, right);
        self.commit(state, result);

        if result.is_finite() {
            state.stored_operand = Some(result);
            state.last_operand = Some(right);
        }
        state.awaiting_operand = true;
    }

    fn press_percent(&self, state: &mut SessionState) {
        let current = state.current_value();
        if !current.is_finite() {
            return;
        }

        let percentage = match state.stored_operand {
            Some(stored) if state.pending_operator.is_some() => stored * current / 100.0,
            _ => current / 100.0,
        };

        self.commit(state, percentage);
        state.awaiting_operand = true;
    }

    // ========================================================================
    // Unary operations
    // ========================================================================

    fn apply_unary(&self, state: &mut SessionState, action: Action) {
        let current = state.current_value();
        if !current.is_finite() {
            return;
        }

        match action {
            Action::Negate => self.commit(state, -current),
            Action::Reciprocal => self.commit(state, guarded_divide(1.0, current)),
            Action::Square => self.commit(state, current * current),
            Action::SquareRoot if current < 0.0 => {
                tracing::debug!("Square root of negative value {}", current);
                state.enter_error(INVALID_INPUT);
            },
            Action::SquareRoot => self.commit(state, current.sqrt()),
            _ => {},
        }
    }

    // ========================================================================
    // Commit
    // ========================================================================

    /// Finalize a computed value into the entry buffer.
    ///
    /// Non-finite values enter the divide-by-zero sentinel and drop the
    /// chain; finite ones are rounded and stored ungrouped.
    fn commit(&self, state: &mut SessionState, value: f64) {
        if !value.is_finite() {
            tracing::debug!("Non-finite result {}, entering error state", value);
            state.enter_error(DIVIDE_BY_ZERO);
            return;
        }

        let rounded = round_committed(value, self.config.rounding_digits);
        state.entry = render_number(rounded, &Locale::RAW, &self.config.notation);
    }
}

/// Apply one action with the standard configuration.
pub fn apply(action: Action, state: SessionState) -> SessionState {
    Evaluator::default().apply(action, state)
}
