// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator session events
// ============================================================================

use crate::domain::{Action, MemoryAction};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator controller
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// An evaluator action was applied
    ActionApplied {
        action: Action,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// The session entered an error sentinel
    ErrorEntered {
        sentinel: String,
        timestamp: DateTime<Utc>,
    },

    /// A memory operation changed or read the bank
    MemoryChanged {
        action: MemoryAction,
        len: usize,
        head: Option<f64>,
        timestamp: DateTime<Utc>,
    },

    /// The memory list was expanded or collapsed
    MemoryViewToggled {
        open: bool,
        timestamp: DateTime<Utc>,
    },

    /// Session and memory were reset to their initial state
    Reset { timestamp: DateTime<Utc> },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history panes, telemetry, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalculatorEvent::Reset {
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_events(vec![
            CalculatorEvent::MemoryViewToggled {
                open: true,
                timestamp: Utc::now(),
            },
            CalculatorEvent::Reset {
                timestamp: Utc::now(),
            },
        ]);

        let events = handler.events();
        assert_eq!(handler.len(), 2);
        assert!(matches!(
            events[0],
            CalculatorEvent::MemoryViewToggled { open: true, .. }
        ));
        assert!(matches!(events[1], CalculatorEvent::Reset { .. }));
    }

    #[test]
    fn test_recording_handler_shared_across_threads() {
        let handler = Arc::new(RecordingEventHandler::new());

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handler = Arc::clone(&handler);
                thread::spawn(move || {
                    for _ in 0..25 {
                        handler.on_event(CalculatorEvent::Reset {
                            timestamp: Utc::now(),
                        });
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(handler.len(), 100);
    }
}
