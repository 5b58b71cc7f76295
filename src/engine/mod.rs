// ============================================================================
// Engine Module
// Contains the evaluator, memory operations and the session controller
// ============================================================================

mod calculator;
mod evaluator;
mod memory;

pub mod factory;

pub use calculator::Calculator;
pub use evaluator::{apply, Evaluator};
pub use factory::{create_from_config, CalculatorBuilder};
pub use memory::{
    memory_add, memory_clear, memory_recall, memory_store, memory_subtract, memory_toggle_view,
};
