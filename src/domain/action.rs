// ============================================================================
// Action Domain Model
// The closed set of inputs a calculator session understands
// ============================================================================

use crate::numeric::{guarded_divide, EngineError, EngineResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Binary Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator. Division by zero yields `+inf`.
    #[inline]
    pub fn perform(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => guarded_divide(left, right),
        }
    }

    /// Glyph shown on the expression line
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "×" | "x" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(EngineError::UnknownToken(other.to_string())),
        }
    }
}

// ============================================================================
// Evaluator Actions
// ============================================================================

/// Actions dispatched into the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// A digit key, 0-9
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Percent,
    /// Clears the current operand only
    ClearEntry,
    /// Clears the whole session
    ClearAll,
    Backspace,
    Negate,
    Reciprocal,
    Square,
    SquareRoot,
}

impl Action {
    /// Build a digit action, rejecting anything outside 0-9.
    pub fn digit(d: u8) -> EngineResult<Self> {
        if d <= 9 {
            Ok(Action::Digit(d))
        } else {
            Err(EngineError::InvalidDigit(d))
        }
    }

    /// Whether this action always leaves an error state.
    pub fn recovers_from_error(&self) -> bool {
        matches!(
            self,
            Action::Digit(_) | Action::Decimal | Action::ClearEntry | Action::ClearAll
        )
    }
}

impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let [b] = token.as_bytes() {
            if b.is_ascii_digit() {
                return Ok(Action::Digit(b - b'0'));
            }
        }

        match token {
            "." | "," => Ok(Action::Decimal),
            "=" => Ok(Action::Equals),
            "%" => Ok(Action::Percent),
            "CE" | "ce" => Ok(Action::ClearEntry),
            "C" | "c" | "AC" => Ok(Action::ClearAll),
            "BS" | "⌫" | "back" => Ok(Action::Backspace),
            "+/-" | "±" | "neg" => Ok(Action::Negate),
            "1/x" | "recip" => Ok(Action::Reciprocal),
            "x²" | "sqr" => Ok(Action::Square),
            "√" | "sqrt" => Ok(Action::SquareRoot),
            other => other.parse().map(Action::Operator),
        }
    }
}

// ============================================================================
// Memory Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemoryAction {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
    ToggleView,
}

impl FromStr for MemoryAction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MC" => Ok(MemoryAction::Clear),
            "MR" => Ok(MemoryAction::Recall),
            "M+" => Ok(MemoryAction::Add),
            "M-" | "M−" => Ok(MemoryAction::Subtract),
            "MS" => Ok(MemoryAction::Store),
            "M" | "M▾" => Ok(MemoryAction::ToggleView),
            other => Err(EngineError::UnknownToken(other.to_string())),
        }
    }
}

// ============================================================================
// Controller Input
// ============================================================================

/// Anything the session controller accepts in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Input {
    Action(Action),
    Memory(MemoryAction),
}

impl From<Action> for Input {
    fn from(action: Action) -> Self {
        Input::Action(action)
    }
}

impl From<MemoryAction> for Input {
    fn from(action: MemoryAction) -> Self {
        Input::Memory(action)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Input::Action(Action::Operator(op))
    }
}

impl FromStr for Input {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Memory tokens are checked first so "M-" is not read as an operator
        match s.parse::<MemoryAction>() {
            Ok(memory) => Ok(Input::Memory(memory)),
            Err(_) => s.parse::<Action>().map(Input::Action),
        }
    }
}

/// Split a whitespace-separated key script into inputs.
///
/// Multi-digit tokens such as `"200"` expand to one digit press per
/// character, so `"200 + 10 %"` reads the way it would be typed.
pub fn parse_script(script: &str) -> EngineResult<Vec<Input>> {
    let mut inputs = Vec::new();

    for token in script.split_whitespace() {
        let is_number = token.len() > 1
            && token.chars().all(|c| c.is_ascii_digit() || c == '.');

        if is_number {
            for c in token.chars() {
                inputs.push(c.to_string().parse::<Input>()?);
            }
        } else {
            inputs.push(token.parse()?);
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_perform() {
        assert_eq!(Operator::Add.perform(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.perform(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.perform(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.perform(3.0, 2.0), 1.5);
        assert_eq!(Operator::Divide.perform(-3.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("7".parse::<Action>().unwrap(), Action::Digit(7));
        assert_eq!(".".parse::<Action>().unwrap(), Action::Decimal);
        assert_eq!("CE".parse::<Action>().unwrap(), Action::ClearEntry);
        assert_eq!("√".parse::<Action>().unwrap(), Action::SquareRoot);
        assert_eq!(
            "÷".parse::<Action>().unwrap(),
            Action::Operator(Operator::Divide)
        );
        assert_eq!(
            "sin".parse::<Action>(),
            Err(EngineError::UnknownToken("sin".to_string()))
        );
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Action::digit(9), Ok(Action::Digit(9)));
        assert_eq!(Action::digit(10), Err(EngineError::InvalidDigit(10)));
    }

    #[test]
    fn test_input_prefers_memory_tokens() {
        assert_eq!(
            "M-".parse::<Input>().unwrap(),
            Input::Memory(MemoryAction::Subtract)
        );
        assert_eq!(
            "-".parse::<Input>().unwrap(),
            Input::Action(Action::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn test_parse_script_expands_numbers() {
        let inputs = parse_script("200 + 10 % MS").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Action(Action::Digit(2)),
                Input::Action(Action::Digit(0)),
                Input::Action(Action::Digit(0)),
                Input::Action(Action::Operator(Operator::Add)),
                Input::Action(Action::Digit(1)),
                Input::Action(Action::Digit(0)),
                Input::Action(Action::Percent),
                Input::Memory(MemoryAction::Store),
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown() {
        assert!(parse_script("2 ^ 3").is_err());
    }
}
