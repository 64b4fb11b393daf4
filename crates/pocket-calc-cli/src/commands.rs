//! CLI command definitions using clap

use crate::config::{ColorChoice, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};

/// Pocket Calc: replay phone-calculator key presses from the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress log output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub output: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and show the display
    ///
    /// Keys are the keypad symbols 0-9 . AC C ± % ÷ × - + = with the
    /// aliases * x / ~ +/- for keyboards. `7+8=` and `7 + 8 =` are the same.
    Run(RunArgs),

    /// Format numbers the way the display shows them
    Format(FormatArgs),

    /// Show the keypad layout
    Keypad(KeypadArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Key script
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Show the display after every key
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the format command
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Raw values to format
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Keys to press first, so labels and highlight reflect that state
    pub keys: Vec<String>,
}

/// Color argument values
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument values
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
