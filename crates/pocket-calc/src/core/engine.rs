//! Calculator engine: the button-press state machine
//!
//! The engine owns a single [`EngineState`]. Every key press is handled to
//! completion and either changes the state ([`Outcome::Applied`]) or leaves
//! it untouched ([`Outcome::Ignored`]). Arithmetic failures put the engine in
//! a sticky error phase that only [`Key::Clear`] leaves.

use crate::core::format::{digit_count, format, format_number, number_to_raw};
use crate::core::key::Key;
use crate::core::{apply, Operator, ERROR_MARKER};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Maximum digits a typed operand may hold (sign and point excluded)
pub const MAX_ENTRY_DIGITS: usize = 9;

/// Where the engine is in the entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Digits append to the current entry
    #[default]
    Entering,
    /// An operator or equals was just pressed; the next digit starts a new
    /// operand
    Armed,
    /// Like `Armed`, but ± or % has since changed the shown value, so the
    /// next operator evaluates instead of replacing
    Adjusted,
    /// Arithmetic failed; everything but clear is ignored
    Error,
}

/// Left-hand operand and operator waiting for the right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    /// Left-hand operand
    pub lhs: f64,
    /// Operator to apply
    pub op: Operator,
}

/// Whether a key press changed the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The press changed (or re-set) the state
    Applied,
    /// The press was a no-op
    Ignored,
}

/// Label shown on the clear button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearLabel {
    /// "AC": nothing to clear beyond the initial state
    AllClear,
    /// "C": an entry, result or pending operation exists
    Clear,
}

impl ClearLabel {
    /// Returns the button text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::Clear => "C",
        }
    }
}

impl std::fmt::Display for ClearLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Raw text of the active operand or last result
    entry: String,
    /// Pending left operand and operator, always present together
    pending: Option<Pending>,
    /// Entry phase
    phase: Phase,
    /// Human-readable trace of the expression so far
    equation: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            pending: None,
            phase: Phase::Entering,
            equation: String::new(),
        }
    }
}

/// What the view renders after every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadModel {
    /// Formatted display text
    pub display: String,
    /// Equation trace
    pub equation: String,
    /// AC/C button label
    pub clear_label: ClearLabel,
    /// Operator button to highlight, if one is armed
    pub highlighted: Option<Operator>,
    /// Whether the display shows the error marker
    pub is_error: bool,
}

/// The calculator engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    /// Creates an engine showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores an engine from a state snapshot
    #[must_use]
    pub fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Handles one key press
    pub fn press(&mut self, key: Key) -> Outcome {
        trace!(key = %key, "key pressed");
        let outcome = match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
        };
        debug!(
            key = %key,
            ?outcome,
            display = self.raw_display(),
            equation = %self.state.equation,
            "key handled"
        );
        outcome
    }

    /// Presses every key in order, returning how many were applied
    pub fn press_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .filter(|&key| self.press(key) == Outcome::Applied)
            .count()
    }

    /// Appends a digit to the entry, or starts a new entry when armed
    pub fn input_digit(&mut self, d: u8) -> Outcome {
        if self.is_error() || d > 9 {
            return Outcome::Ignored;
        }
        let digit = char::from(b'0' + d);

        if self.awaiting_new_operand() {
            self.state.entry = digit.to_string();
            self.state.phase = Phase::Entering;
            return Outcome::Applied;
        }

        let candidate = if self.state.entry == "0" {
            digit.to_string()
        } else {
            format!("{}{digit}", self.state.entry)
        };
        if digit_count(&candidate) > MAX_ENTRY_DIGITS {
            return Outcome::Ignored;
        }
        self.state.entry = candidate;
        Outcome::Applied
    }

    /// Adds a decimal point, or starts a new "0." entry when armed
    pub fn input_decimal(&mut self) -> Outcome {
        if self.is_error() {
            return Outcome::Ignored;
        }
        if self.awaiting_new_operand() {
            self.state.entry = "0.".to_string();
            self.state.phase = Phase::Entering;
            return Outcome::Applied;
        }
        if self.state.entry.contains('.') {
            return Outcome::Ignored;
        }
        self.state.entry.push('.');
        Outcome::Applied
    }

    /// Resets to the initial state
    pub fn clear(&mut self) -> Outcome {
        self.state = EngineState::default();
        Outcome::Applied
    }

    /// Adds or removes the leading minus sign; no-op on "0"
    pub fn toggle_sign(&mut self) -> Outcome {
        if self.is_error() || self.state.entry == "0" {
            return Outcome::Ignored;
        }
        self.state.entry = match self.state.entry.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.state.entry),
        };
        self.mark_adjusted();
        Outcome::Applied
    }

    /// Divides the display by 100, whatever operation is pending
    pub fn percent(&mut self) -> Outcome {
        if self.is_error() {
            return Outcome::Ignored;
        }
        self.state.entry = number_to_raw(self.entry_value() / 100.0);
        self.mark_adjusted();
        Outcome::Applied
    }

    /// Handles an operator press.
    ///
    /// Without a pending operation the display becomes the left operand.
    /// Pressed again with the operand untouched, the operator is replaced.
    /// Otherwise, including after ± or % changed the operand, the pending
    /// operation is evaluated and its result becomes the new left operand.
    pub fn operator(&mut self, op: Operator) -> Outcome {
        if self.is_error() {
            return Outcome::Ignored;
        }

        match self.state.pending {
            Some(pending) if self.state.phase == Phase::Armed => {
                self.state.pending = Some(Pending { op, ..pending });
                self.state.equation =
                    format!("{} {op}", trim_trailing_operator(&self.state.equation));
            }
            Some(pending) => {
                let rhs = self.entry_value();
                let Some(result) = apply(pending.lhs, rhs, pending.op).number() else {
                    return self.fail(pending, rhs);
                };
                self.state.entry = number_to_raw(result);
                self.state.pending = Some(Pending { lhs: result, op });
                self.state.equation = format!("{} {op}", format_number(result));
            }
            None => {
                self.state.pending = Some(Pending {
                    lhs: self.entry_value(),
                    op,
                });
                self.state.equation = format!("{} {op}", format(&self.state.entry));
            }
        }

        self.state.phase = Phase::Armed;
        Outcome::Applied
    }

    /// Evaluates the pending operation; no-op when nothing is pending
    pub fn equals(&mut self) -> Outcome {
        if self.is_error() {
            return Outcome::Ignored;
        }
        let Some(pending) = self.state.pending else {
            return Outcome::Ignored;
        };

        let rhs = self.entry_value();
        let Some(result) = apply(pending.lhs, rhs, pending.op).number() else {
            return self.fail(pending, rhs);
        };

        self.state.equation = format!(
            "{} {} {} =",
            trim_trailing_operator(&self.state.equation),
            pending.op,
            format(&self.state.entry)
        );
        self.state.entry = number_to_raw(result);
        self.state.pending = None;
        self.state.phase = Phase::Armed;
        Outcome::Applied
    }

    fn mark_adjusted(&mut self) {
        if self.state.phase == Phase::Armed {
            self.state.phase = Phase::Adjusted;
        }
    }

    fn fail(&mut self, pending: Pending, rhs: f64) -> Outcome {
        debug!(
            lhs = pending.lhs,
            rhs,
            op = %pending.op,
            "arithmetic error, entering error state"
        );
        self.state = EngineState {
            phase: Phase::Error,
            ..EngineState::default()
        };
        Outcome::Applied
    }

    /// Numeric value of the current entry
    fn entry_value(&self) -> f64 {
        self.state.entry.parse().unwrap_or(0.0)
    }

    // ===== Read-only queries =====

    /// Returns true while the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.phase == Phase::Error
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// True right after an operator, equals or error: the next digit starts
    /// a fresh operand
    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        self.state.phase != Phase::Entering
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.state.pending.map(|p| p.lhs)
    }

    /// Operator of the pending operation
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending.map(|p| p.op)
    }

    /// Unformatted display text (the error marker in the error phase)
    #[must_use]
    pub fn raw_display(&self) -> &str {
        if self.is_error() {
            ERROR_MARKER
        } else {
            &self.state.entry
        }
    }

    /// Formatted display text
    #[must_use]
    pub fn display(&self) -> String {
        format(self.raw_display())
    }

    /// Equation trace
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.state.equation
    }

    /// "C" once there is anything to clear, "AC" otherwise
    #[must_use]
    pub fn clear_button_label(&self) -> ClearLabel {
        if self.raw_display() != "0" || self.state.pending.is_some() {
            ClearLabel::Clear
        } else {
            ClearLabel::AllClear
        }
    }

    /// True when `op` is armed and waiting for its second operand
    #[must_use]
    pub fn is_operator_highlighted(&self, op: Operator) -> bool {
        matches!(self.state.phase, Phase::Armed | Phase::Adjusted)
            && self.pending_operator() == Some(op)
    }

    /// Snapshot for the view
    #[must_use]
    pub fn read_model(&self) -> ReadModel {
        ReadModel {
            display: self.display(),
            equation: self.state.equation.clone(),
            clear_label: self.clear_button_label(),
            highlighted: Operator::ALL
                .into_iter()
                .find(|&op| self.is_operator_highlighted(op)),
            is_error: self.is_error(),
        }
    }
}

fn trim_trailing_operator(equation: &str) -> &str {
    Operator::ALL
        .iter()
        .find_map(|op| equation.strip_suffix(op.symbol()))
        .map_or(equation, str::trim_end)
}
