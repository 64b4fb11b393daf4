//! Pocket Calc - phone-style four-function calculator engine
//!
//! The engine interprets keypad presses the way a phone's built-in
//! calculator does: operands are typed digit by digit, operators chain
//! left to right, `=` evaluates, and the display is formatted with
//! grouping, trailing-zero trimming and exponential notation. Rendering is
//! left to the caller, which reads a [`ReadModel`](core::engine::ReadModel)
//! after every key.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_all(parse_keys("7 + 8 =").unwrap());
//! assert_eq!(engine.display(), "15");
//! assert_eq!(engine.equation(), "7 + 8 =");
//!
//! // Division by zero is sticky until cleared
//! engine.press_all(parse_keys("1 ÷ 0 =").unwrap());
//! assert_eq!(engine.display(), "Error");
//! engine.press(Key::Clear);
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::engine::{
        ClearLabel, Engine, EngineState, Outcome, Pending, Phase, ReadModel, MAX_ENTRY_DIGITS,
    };
    pub use crate::core::format::{format, format_number, format_value};
    pub use crate::core::key::{parse_keys, Key, ParseKeyError};
    pub use crate::core::{apply, CalcError, CalcResult, Operator, Value, ERROR_MARKER};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
}
