//! Keypad layout model
//!
//! Which buttons exist, where they sit, and how their labels and highlight
//! depend on engine state. Drawing them is left to the view.
//!
//! ```text
//! [ AC ] [ ± ] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use crate::core::engine::Engine;
use crate::core::key::Key;
use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// Button family, used by views to pick a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    /// AC/C, ±, %
    Function,
    /// ÷ × - + =
    Operation,
    /// Digits and the decimal point
    Number,
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// Key emitted when pressed
    pub key: Key,
    /// Button family
    pub kind: ButtonKind,
    /// Spans two columns
    pub wide: bool,
}

impl KeypadButton {
    const fn new(key: Key, kind: ButtonKind) -> Self {
        Self {
            key,
            kind,
            wide: false,
        }
    }

    const fn number(d: u8) -> Self {
        Self::new(Key::Digit(d), ButtonKind::Number)
    }

    const fn operation(op: Operator) -> Self {
        Self::new(Key::Operator(op), ButtonKind::Operation)
    }

    /// Returns the label for the current engine state; the clear button
    /// reads "AC" or "C"
    #[must_use]
    pub fn label(&self, engine: &Engine) -> String {
        match self.key {
            Key::Clear => engine.clear_button_label().label().to_string(),
            key => key.symbol(),
        }
    }

    /// Returns true when this is the armed operator button
    #[must_use]
    pub fn is_active(&self, engine: &Engine) -> bool {
        match self.key {
            Key::Operator(op) => engine.is_operator_highlighted(op),
            _ => false,
        }
    }

    /// Number of columns the button occupies
    #[must_use]
    pub const fn columns(&self) -> usize {
        if self.wide {
            2
        } else {
            1
        }
    }
}

/// The phone-style keypad: five rows of four columns
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of columns in every row
    pub const COLUMNS: usize = 4;

    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use ButtonKind::Function;

        let rows = vec![
            vec![
                KeypadButton::new(Key::Clear, Function),
                KeypadButton::new(Key::ToggleSign, Function),
                KeypadButton::new(Key::Percent, Function),
                KeypadButton::operation(Operator::Divide),
            ],
            vec![
                KeypadButton::number(7),
                KeypadButton::number(8),
                KeypadButton::number(9),
                KeypadButton::operation(Operator::Multiply),
            ],
            vec![
                KeypadButton::number(4),
                KeypadButton::number(5),
                KeypadButton::number(6),
                KeypadButton::operation(Operator::Subtract),
            ],
            vec![
                KeypadButton::number(1),
                KeypadButton::number(2),
                KeypadButton::number(3),
                KeypadButton::operation(Operator::Add),
            ],
            vec![
                KeypadButton {
                    wide: true,
                    ..KeypadButton::number(0)
                },
                KeypadButton::new(Key::Decimal, ButtonKind::Number),
                KeypadButton::new(Key::Equals, ButtonKind::Operation),
            ],
        ];
        Self { rows }
    }

    /// Rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// All buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Finds the button emitting `key`
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.key == key)
    }

    /// Returns `(row, index)` of the button emitting `key`
    #[must_use]
    pub fn position(&self, key: Key) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|b| b.key == key)
                .map(|c| (r, c))
        })
    }

    /// Labels of every row for the current engine state
    #[must_use]
    pub fn labels(&self, engine: &Engine) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|b| b.label(engine)).collect())
            .collect()
    }

    /// The armed operator button, if any
    #[must_use]
    pub fn active(&self, engine: &Engine) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.is_active(engine))
    }
}
