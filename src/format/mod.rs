// ============================================================================
// Display Formatter Module
// Pure projections from numbers and entry buffers to display strings
// ============================================================================
//
// Nothing here reads or writes session state; every function can be called
// redundantly. The en-US free functions are the defaults the controller
// uses when no other formatter is configured.

mod entry;
mod locale;
mod number;

pub use entry::{format_entry_for_display, render_entry};
pub use locale::Locale;
pub use number::{format_number, render_number, Notation};
