//! Core calculator module: arithmetic, formatting, keys and the engine
//!
//! Layering, leaf first:
//! - [`operations`]: the four binary operators and `apply`
//! - [`format`]: numeric value to display text
//! - [`key`]: the fixed set of keypad symbols
//! - [`engine`]: the input state machine driven by key presses

pub mod engine;
pub mod format;
pub mod key;
mod operations;

pub use operations::{apply, Operator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown on the display while the engine is in the error state
pub const ERROR_MARKER: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic failures. Surfaced to the user as the sticky error display,
/// never as an engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed to infinity
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

/// Outcome of an arithmetic step: a number or the error marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A finite result
    Number(f64),
    /// Arithmetic failed; the display shows [`ERROR_MARKER`]
    Error,
}

impl Value {
    /// Returns the number, if any
    #[must_use]
    pub const fn number(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Error => None,
        }
    }

    /// Returns true for the error marker
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<CalcResult<f64>> for Value {
    fn from(result: CalcResult<f64>) -> Self {
        result.map_or(Self::Error, Self::Number)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format::number_to_raw(*n)),
            Self::Error => f.write_str(ERROR_MARKER),
        }
    }
}
