//! Output rendering for read models, replays and the keypad

use crate::runner::{Replay, Step};
use console::style;
use pocket_calc::core::engine::{Engine, Outcome, ReadModel};
use pocket_calc::keypad::{Keypad, KeypadButton};
use serde::Serialize;

/// Inner width of a single keypad cell
const CELL_WIDTH: usize = 4;

/// Renders the display and, above it, the equation trace
#[must_use]
pub fn render_model(model: &ReadModel, use_color: bool) -> String {
    let display = if !use_color {
        model.display.clone()
    } else if model.is_error {
        style(&model.display).red().bold().to_string()
    } else {
        style(&model.display).bold().to_string()
    };

    if model.equation.is_empty() {
        display
    } else if use_color {
        format!("{}\n{display}", style(&model.equation).dim())
    } else {
        format!("{}\n{display}", model.equation)
    }
}

/// Renders one replay step as a single tab-separated line
#[must_use]
pub fn render_step(step: &Step, use_color: bool) -> String {
    let key = step.key.symbol();
    let marker = match step.outcome {
        Outcome::Applied => "",
        Outcome::Ignored => " (ignored)",
    };
    let display = if use_color && step.model.is_error {
        style(&step.model.display).red().to_string()
    } else {
        step.model.display.clone()
    };
    format!("{key}{marker}\t{display}\t{}", step.model.equation)
        .trim_end()
        .to_string()
}

/// Renders a whole replay: every step when `steps` is set, then the final
/// read model
#[must_use]
pub fn render_replay(replay: &Replay, steps: bool, use_color: bool) -> String {
    let mut out = String::new();
    if steps {
        for step in &replay.steps {
            out.push_str(&render_step(step, use_color));
            out.push('\n');
        }
    }
    out.push_str(&render_model(&replay.final_model, use_color));
    out
}

/// Renders the keypad as bracketed cells; the armed operator is marked
#[must_use]
pub fn render_keypad(keypad: &Keypad, engine: &Engine, use_color: bool) -> String {
    keypad
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| render_cell(button, engine, use_color))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cell(button: &KeypadButton, engine: &Engine, use_color: bool) -> String {
    // a wide cell also swallows the "] [" between two cells
    let width = CELL_WIDTH * button.columns() + (button.columns() - 1) * 3;
    let label = button.label(engine);
    let active = button.is_active(engine);

    if use_color && active {
        let padded = format!("{label:^width$}");
        format!("[{}]", style(padded).reverse())
    } else if active {
        let marked = format!("*{label}");
        format!("[{marked:^width$}]")
    } else {
        format!("[{label:^width$}]")
    }
}

/// Serializes any output value as pretty JSON
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
