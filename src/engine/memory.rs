// ============================================================================
// Memory Operations
// Value-in, value-out wrappers over the memory bank
// ============================================================================

use super::Evaluator;
use crate::domain::{MemoryBank, SessionState};

/// Memory math treats an unparsable current value as zero.
#[inline]
fn coerce(current_value: f64) -> f64 {
    if current_value.is_nan() {
        0.0
    } else {
        current_value
    }
}

pub fn memory_clear(mut bank: MemoryBank) -> MemoryBank {
    bank.clear();
    bank
}

/// Commit the head entry into the session; no-op on an empty bank.
pub fn memory_recall(bank: &MemoryBank, state: SessionState) -> SessionState {
    Evaluator::default().recall(bank, state)
}

pub fn memory_add(mut bank: MemoryBank, current_value: f64) -> MemoryBank {
    bank.add(coerce(current_value));
    bank
}

pub fn memory_subtract(mut bank: MemoryBank, current_value: f64) -> MemoryBank {
    bank.subtract(coerce(current_value));
    bank
}

pub fn memory_store(mut bank: MemoryBank, current_value: f64) -> MemoryBank {
    bank.store(coerce(current_value));
    bank
}

pub fn memory_toggle_view(open: bool) -> bool {
    !open
}
