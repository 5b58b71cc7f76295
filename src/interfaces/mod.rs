// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod number_formatter;

pub use event_handler::{
    CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
pub use number_formatter::{LocaleFormatter, NumberFormatter};
