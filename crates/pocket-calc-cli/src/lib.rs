//! Pocket Calc CLI Library
//!
//! Command-line front end for the `pocket-calc` engine: replays key
//! scripts, formats numbers and prints the keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod output;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, FormatArg, FormatArgs, KeypadArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{format_values, parse_script, replay, replay_on, Formatted, Replay, Step};
