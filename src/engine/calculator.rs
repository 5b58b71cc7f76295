// ============================================================================
// Calculator
// Session controller: owns the state, the memory bank and the view flag
// ============================================================================

use super::Evaluator;
use crate::domain::{
    parse_script, Action, CalculatorConfig, DisplaySnapshot, Input, MemoryAction, MemoryBank,
    SessionState,
};
use crate::interfaces::{CalculatorEvent, EventHandler, NoOpEventHandler, NumberFormatter};
use crate::numeric::EngineResult;
use chrono::Utc;
use std::sync::Arc;

/// Single calculator session.
///
/// Inputs are applied one at a time through `&mut self`; there is no
/// interior mutability and no locking. Each call returns the display string
/// for the resulting state.
pub struct Calculator {
    /// Reducer for evaluator actions
    evaluator: Evaluator,

    /// Display projection for entries and memory values
    formatter: Arc<dyn NumberFormatter>,

    /// Current arithmetic session
    state: SessionState,

    /// Memory registers, head first
    memory: MemoryBank,

    /// Whether the memory list is expanded
    memory_view_open: bool,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Calculator with the standard configuration and no event handler
    pub fn new() -> Self {
        let config = CalculatorConfig::standard();
        Self::from_parts(
            Evaluator::new(config),
            Arc::new(config.formatter()),
            Arc::new(NoOpEventHandler),
        )
    }

    /// Create a calculator from a validated configuration
    pub fn with_config(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            Evaluator::new(config),
            Arc::new(config.formatter()),
            event_handler,
        ))
    }

    pub(crate) fn from_parts(
        evaluator: Evaluator,
        formatter: Arc<dyn NumberFormatter>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            evaluator,
            formatter,
            state: SessionState::new(),
            memory: MemoryBank::new(),
            memory_view_open: false,
            event_handler,
        }
    }

    // ========================================================================
    // Input dispatch
    // ========================================================================

    /// Apply one input and return the new display string
    pub fn press(&mut self, input: impl Into<Input>) -> String {
        let input = input.into();
        let was_error = self.state.is_error();

        let mut events = match input {
            Input::Action(action) => self.apply_action(action),
            Input::Memory(action) => self.apply_memory(action),
        };

        if self.state.is_error() && !was_error {
            events.push(CalculatorEvent::ErrorEntered {
                sentinel: self.state.entry().to_string(),
                timestamp: Utc::now(),
            });
        }

        let shown = self.display();
        tracing::debug!("Input {:?} -> {:?}", input, shown);

        self.event_handler.on_events(events);
        shown
    }

    /// Apply a sequence of inputs, returning the final display
    pub fn press_all<I>(&mut self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<Input>,
    {
        for input in inputs {
            self.press(input);
        }
        self.display()
    }

    /// Parse and replay a whitespace-separated key script such as `"2 + 3 ="`
    pub fn run_script(&mut self, script: &str) -> EngineResult<String> {
        let inputs = parse_script(script)?;
        Ok(self.press_all(inputs))
    }

    /// Return to the initial state, memory included
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        self.memory = MemoryBank::new();
        self.memory_view_open = false;
        self.event_handler.on_event(CalculatorEvent::Reset {
            timestamp: Utc::now(),
        });
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Main display line for the current entry
    pub fn display(&self) -> String {
        self.formatter.format_entry(self.state.entry())
    }

    /// Pending expression line such as "200 +"; empty without an open chain
    pub fn expression(&self) -> String {
        match (self.state.stored_operand(), self.state.pending_operator()) {
            (Some(stored), Some(op)) if self.state.repeat_operand().is_none() => {
                format!("{} {}", self.formatter.format_number(stored), op)
            },
            _ => String::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    pub fn is_memory_view_open(&self) -> bool {
        self.memory_view_open
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.evaluator.config()
    }

    pub fn formatter(&self) -> &dyn NumberFormatter {
        self.formatter.as_ref()
    }

    /// Everything needed to render the current frame
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            display: self.display(),
            expression: self.expression(),
            memory: self
                .memory
                .iter()
                .map(|entry| self.formatter.format_number(entry.value))
                .collect(),
            memory_view_open: self.memory_view_open,
            is_error: self.state.is_error(),
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn apply_action(&mut self, action: Action) -> Vec<CalculatorEvent> {
        let state = std::mem::take(&mut self.state);
        self.state = self.evaluator.apply(action, state);

        vec![CalculatorEvent::ActionApplied {
            action,
            display: self.display(),
            timestamp: Utc::now(),
        }]
    }

    fn apply_memory(&mut self, action: MemoryAction) -> Vec<CalculatorEvent> {
        let mut events = Vec::new();
        let value = self.state.memory_value();

        match action {
            MemoryAction::Clear => {
                self.memory.clear();
                if self.memory_view_open {
                    self.memory_view_open = false;
                    events.push(CalculatorEvent::MemoryViewToggled {
                        open: false,
                        timestamp: Utc::now(),
                    });
                }
            },
            MemoryAction::Recall => {
                let state = std::mem::take(&mut self.state);
                self.state = self.evaluator.recall(&self.memory, state);
            },
            MemoryAction::Add => {
                self.memory.add(value);
            },
            MemoryAction::Subtract => {
                self.memory.subtract(value);
            },
            MemoryAction::Store => {
                self.memory.store(value);
            },
            MemoryAction::ToggleView => {
                self.memory_view_open = !self.memory_view_open;
                events.push(CalculatorEvent::MemoryViewToggled {
                    open: self.memory_view_open,
                    timestamp: Utc::now(),
                });
                return events;
            },
        }

        events.insert(
            0,
            CalculatorEvent::MemoryChanged {
                action,
                len: self.memory.len(),
                head: self.memory.head().map(|entry| entry.value),
                timestamp: Utc::now(),
            },
        );
        events
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
