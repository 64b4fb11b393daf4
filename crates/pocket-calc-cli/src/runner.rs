//! Key-script replay through the engine

use crate::error::{CliError, CliResult};
use pocket_calc::core::engine::{Engine, Outcome, ReadModel};
use pocket_calc::core::format::{format, is_valid_number};
use pocket_calc::core::key::{parse_keys, Key};
use pocket_calc::core::ERROR_MARKER;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One key press and what the view would show afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Key pressed
    pub key: Key,
    /// Whether the press changed anything
    pub outcome: Outcome,
    /// Read model after the press
    pub model: ReadModel,
}

/// Result of replaying a key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    /// Every press in order
    pub steps: Vec<Step>,
    /// Read model after the last press
    pub final_model: ReadModel,
}

/// A formatted value for the `format` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted {
    /// Input text
    pub raw: String,
    /// Display text
    pub display: String,
}

/// Joins CLI arguments into one script and parses it
pub fn parse_script(args: &[String]) -> CliResult<Vec<Key>> {
    Ok(parse_keys(&args.join(" "))?)
}

/// Presses `keys` on a fresh engine, recording every step
#[must_use]
pub fn replay(keys: &[Key]) -> Replay {
    replay_on(&mut Engine::new(), keys)
}

/// Presses `keys` on an existing engine, recording every step
pub fn replay_on(engine: &mut Engine, keys: &[Key]) -> Replay {
    let steps: Vec<Step> = keys
        .iter()
        .map(|&key| {
            let outcome = engine.press(key);
            Step {
                key,
                outcome,
                model: engine.read_model(),
            }
        })
        .collect();

    let ignored = steps
        .iter()
        .filter(|s| s.outcome == Outcome::Ignored)
        .count();
    info!(keys = keys.len(), ignored, "replay finished");

    Replay {
        steps,
        final_model: engine.read_model(),
    }
}

/// Formats each value, rejecting anything that is not the error marker or
/// a finite number written the way the display holds one
pub fn format_values(values: &[String]) -> CliResult<Vec<Formatted>> {
    values
        .iter()
        .map(|raw| {
            if raw != ERROR_MARKER && !(is_entry_text(raw) && is_valid_number(raw)) {
                return Err(CliError::invalid_argument(format!(
                    "{raw:?} is not a number"
                )));
            }
            let display = format(raw);
            // tracing's field macros bring `display` into scope, so bind first
            let display_str = display.as_str();
            debug!(raw = raw.as_str(), display = display_str, "formatted");
            Ok(Formatted {
                raw: raw.clone(),
                display,
            })
        })
        .collect()
}

/// `-?digits(.digits?)?` with no leading zeros: what the engine can hold
fn is_entry_text(raw: &str) -> bool {
    let magnitude = raw.strip_prefix('-').unwrap_or(raw);
    let (integer, decimal) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    !integer.is_empty()
        && all_digits(integer)
        && all_digits(decimal)
        && (integer == "0" || !integer.starts_with('0'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pocket_calc::core::engine::ClearLabel;
    use pocket_calc::core::Operator;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_script_joins_args() {
        let keys = parse_script(&args(&["12", "+", "3", "="])).unwrap();
        assert_eq!(keys.len(), 5);
        assert_eq!(keys[2], Key::Operator(Operator::Add));
    }

    #[test]
    fn test_parse_script_error() {
        let err = parse_script(&args(&["1", "&"])).unwrap_err();
        assert!(matches!(err, CliError::Key(_)));
    }

    #[test]
    fn test_replay_records_steps() {
        let keys = parse_script(&args(&["7+8="])).unwrap();
        let replay = replay(&keys);
        assert_eq!(replay.steps.len(), 4);
        assert_eq!(replay.steps[1].model.highlighted, Some(Operator::Add));
        assert_eq!(replay.final_model.display, "15");
        assert_eq!(replay.final_model.equation, "7 + 8 =");
    }

    #[test]
    fn test_replay_marks_ignored() {
        let keys = parse_script(&args(&["1÷0=", "5"])).unwrap();
        let replay = replay(&keys);
        assert_eq!(replay.steps.last().unwrap().outcome, Outcome::Ignored);
        assert!(replay.final_model.is_error);
        assert_eq!(replay.final_model.clear_label, ClearLabel::Clear);
    }

    #[test]
    fn test_replay_on_existing_engine() {
        let mut engine = Engine::new();
        engine.press(Key::Digit(9));
        let replay = replay_on(&mut engine, &[Key::Percent]);
        assert_eq!(replay.final_model.display, "0.09");
    }

    #[test]
    fn test_format_values() {
        let out = format_values(&args(&["1234", "-0.50", "Error", "12345000000"])).unwrap();
        let displays: Vec<&str> = out.iter().map(|f| f.display.as_str()).collect();
        assert_eq!(displays, ["1,234", "-0.5", "Error", "1.23450e+10"]);
    }

    #[test]
    fn test_format_values_rejects_text() {
        let err = format_values(&args(&["12", "abc"])).unwrap_err();
        assert!(err.to_string().contains("\"abc\" is not a number"));
    }

    #[test]
    fn test_format_values_rejects_non_entry_forms() {
        for raw in ["1e5", ".5", "+5", "0012345", "1.2.3", "-", "5,000"] {
            let err = format_values(&args(&[raw])).unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument { .. }), "{raw}");
        }
    }

    #[test]
    fn test_format_values_accepts_entry_forms() {
        let out = format_values(&args(&["5.", "0.05", "-0", "-12.50"])).unwrap();
        let displays: Vec<&str> = out.iter().map(|f| f.display.as_str()).collect();
        assert_eq!(displays, ["5", "0.05", "-0", "-12.5"]);
    }

    #[test]
    fn test_format_values_rejects_overlong_integer() {
        let huge = "9".repeat(400);
        assert!(format_values(&[huge]).is_err());
    }

    #[test]
    fn test_replay_serializes() {
        let replay = replay(&[Key::Digit(1)]);
        let json = serde_json::to_value(&replay).unwrap();
        assert_eq!(json["steps"][0]["outcome"], "Applied");
        assert_eq!(json["final_model"]["display"], "1");
    }
}
