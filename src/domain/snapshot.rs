// ============================================================================
// Display Snapshot
// Everything a presentation layer needs to draw one frame
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendered view of a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplaySnapshot {
    /// Main display line
    pub display: String,
    /// Pending expression line, e.g. "200 +" (empty when no chain is active)
    pub expression: String,
    /// Memory entries rendered head first
    pub memory: Vec<String>,
    pub memory_view_open: bool,
    pub is_error: bool,
}

impl DisplaySnapshot {
    /// Whether the memory indicator should be lit
    pub fn has_memory(&self) -> bool {
        !self.memory.is_empty()
    }

    /// Value recall would bring back
    pub fn memory_head(&self) -> Option<&str> {
        self.memory.first().map(String::as_str)
    }
}
