//! The four binary operators and the arithmetic step
//!
//! Division by zero and overflow to infinity are domain errors, not faults:
//! they come back as [`Value::Error`] for the engine to display.

use crate::core::{CalcError, CalcResult, Value};
use serde::{Deserialize, Serialize};

/// Type-safe operator enum - only the four keypad operations exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as printed on the keypad and in equations
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator, rejecting division by zero and non-finite results
    pub fn checked_apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        check_overflow(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Arithmetic step used by the engine: `a op b`, or the error marker
#[must_use]
pub fn apply(a: f64, b: f64, op: Operator) -> Value {
    Value::from(op.checked_apply(a, b))
}

fn check_overflow(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
