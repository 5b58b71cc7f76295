// ============================================================================
// Engine Errors
// Error types for configuration and input decoding
// ============================================================================

use std::fmt;

/// Errors surfaced to the embedding application.
///
/// Arithmetic failures are never reported through this type: they become
/// display sentinels inside the session state. These variants only cover
/// programmer-facing mistakes such as a bad configuration or an unknown key
/// token in a scripted input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EngineError {
    /// Configuration failed validation
    InvalidConfig(String),
    /// Input token does not name any known action
    UnknownToken(String),
    /// Digit outside of 0-9
    InvalidDigit(u8),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            EngineError::UnknownToken(token) => write!(f, "unknown input token: {:?}", token),
            EngineError::InvalidDigit(digit) => {
                write!(f, "invalid digit: {} is not in the range 0-9", digit)
            },
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
