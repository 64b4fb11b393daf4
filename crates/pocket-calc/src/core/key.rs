//! Keypad symbols and key-script parsing
//!
//! The view emits one [`Key`] per button press. Text front ends parse the
//! printed symbols (plus a few ASCII aliases) with [`Key::from_str`] or a
//! whole script with [`parse_keys`].

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// AC / C
    Clear,
    /// ± sign toggle
    ToggleSign,
    /// Divide the display by 100
    Percent,
    /// One of the four binary operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
}

/// Unknown keypad symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key: {symbol:?}")]
pub struct ParseKeyError {
    /// The text that did not match any key
    pub symbol: String,
}

impl Key {
    /// Creates a digit key; `None` for values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the symbol printed on the button
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' | ',' => Self::Decimal,
            '±' | '~' => Self::ToggleSign,
            '%' => Self::Percent,
            '+' => Self::Operator(Operator::Add),
            '-' | '−' => Self::Operator(Operator::Subtract),
            '×' | '*' | 'x' | 'X' => Self::Operator(Operator::Multiply),
            '÷' | '/' => Self::Operator(Operator::Divide),
            '=' => Self::Equals,
            'c' | 'C' => Self::Clear,
            _ => return None,
        };
        Some(key)
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ac") {
            return Ok(Self::Clear);
        }
        if trimmed == "+/-" {
            return Ok(Self::ToggleSign);
        }
        let mut chars = trimmed.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        key.ok_or_else(|| ParseKeyError {
            symbol: s.to_string(),
        })
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// Parses a key script.
///
/// Whitespace-separated tokens are read as individual symbols (`"AC"`,
/// `"+/-"`, `"7"`); within a token each character is one key, so `"7+8="`
/// and `"7 + 8 ="` press the same buttons.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, ParseKeyError> {
    let mut keys = Vec::new();
    for token in script.split_whitespace() {
        if let Ok(key) = token.parse::<Key>() {
            keys.push(key);
            continue;
        }
        for c in token.chars() {
            let key = Key::from_char(c).ok_or_else(|| ParseKeyError {
                symbol: c.to_string(),
            })?;
            keys.push(key);
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(7), Some(Key::Digit(7)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_parse_keypad_symbols() {
        assert_eq!("0".parse::<Key>(), Ok(Key::Digit(0)));
        assert_eq!("9".parse::<Key>(), Ok(Key::Digit(9)));
        assert_eq!(".".parse::<Key>(), Ok(Key::Decimal));
        assert_eq!("AC".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("C".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("±".parse::<Key>(), Ok(Key::ToggleSign));
        assert_eq!("%".parse::<Key>(), Ok(Key::Percent));
        assert_eq!("÷".parse::<Key>(), Ok(Key::Operator(Operator::Divide)));
        assert_eq!("×".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("-".parse::<Key>(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("+".parse::<Key>(), Ok(Key::Operator(Operator::Add)));
        assert_eq!("=".parse::<Key>(), Ok(Key::Equals));
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!("*".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("x".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("/".parse::<Key>(), Ok(Key::Operator(Operator::Divide)));
        assert_eq!("−".parse::<Key>(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("+/-".parse::<Key>(), Ok(Key::ToggleSign));
        assert_eq!("~".parse::<Key>(), Ok(Key::ToggleSign));
        assert_eq!("ac".parse::<Key>(), Ok(Key::Clear));
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = "?".parse::<Key>().unwrap_err();
        assert_eq!(err.symbol, "?");
        assert_eq!(err.to_string(), "Unknown key: \"?\"");
        assert!("12".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_symbol_round_trips_through_parse() {
        let keys = [
            Key::Digit(3),
            Key::Decimal,
            Key::Clear,
            Key::ToggleSign,
            Key::Percent,
            Key::Operator(Operator::Divide),
            Key::Equals,
        ];
        for key in keys {
            assert_eq!(key.symbol().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_parse_keys_compact() {
        let keys = parse_keys("7+8=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(7),
                Key::Operator(Operator::Add),
                Key::Digit(8),
                Key::Equals
            ]
        );
    }

    #[test]
    fn test_parse_keys_tokens() {
        let keys = parse_keys("12 +/- AC 5 %").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::ToggleSign,
                Key::Clear,
                Key::Digit(5),
                Key::Percent
            ]
        );
    }

    #[test]
    fn test_parse_keys_unknown_reports_symbol() {
        let err = parse_keys("1+q").unwrap_err();
        assert_eq!(err.symbol, "q");
    }

    #[test]
    fn test_parse_keys_empty() {
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_key_serde() {
        let json = serde_json::to_string(&Key::Operator(Operator::Add)).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Key::Operator(Operator::Add));
    }
}
