// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod action;
pub mod config;
pub mod memory;
pub mod session;
pub mod snapshot;

pub use action::{parse_script, Action, Input, MemoryAction, Operator};
pub use config::CalculatorConfig;
pub use memory::{MemoryBank, MemoryEntry, MemoryEntryId};
pub use session::{is_error_sentinel, SessionState, DIVIDE_BY_ZERO, INVALID_INPUT};
pub use snapshot::DisplaySnapshot;
