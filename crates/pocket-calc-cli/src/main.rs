//! Pocket Calc CLI: replay calculator key presses
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc run 7 + 8 =          # 7 + 8 =  /  15
//! pocket-calc run --steps '1÷0=5'  # display after every key
//! pocket-calc -o json run 5%       # read model as JSON
//! pocket-calc format 1234.50       # 1,234.5
//! pocket-calc keypad 6 ×           # keypad with × armed
//! ```

use clap::Parser;
use pocket_calc::core::engine::Engine;
use pocket_calc::keypad::Keypad;
use pocket_calc_cli::{
    format_values, logging, output, parse_script, replay, replay_on, Cli, CliConfig, CliResult,
    Commands, FormatArgs, KeypadArgs, OutputFormat, RunArgs, Verbosity,
};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init_logging(config.verbosity);

    match cli.command {
        Commands::Run(args) => run_keys(config, &args),
        Commands::Format(args) => run_format(&config, &args),
        Commands::Keypad(args) => run_keypad(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.output.into())
}

fn run_keys(config: CliConfig, args: &RunArgs) -> CliResult<()> {
    let config = config.with_trace_steps(args.steps);
    let keys = parse_script(&args.keys)?;
    let replay = replay(&keys);

    let text = match config.format {
        OutputFormat::Json if config.trace_steps => output::to_json(&replay)?,
        OutputFormat::Json => output::to_json(&replay.final_model)?,
        OutputFormat::Text => output::render_replay(&replay, config.trace_steps, config.use_color()),
    };
    print(&text)
}

fn run_format(config: &CliConfig, args: &FormatArgs) -> CliResult<()> {
    let formatted = format_values(&args.values)?;

    let text = match config.format {
        OutputFormat::Json => output::to_json(&formatted)?,
        OutputFormat::Text => formatted
            .iter()
            .map(|f| f.display.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    print(&text)
}

fn run_keypad(config: &CliConfig, args: &KeypadArgs) -> CliResult<()> {
    let keys = parse_script(&args.keys)?;
    let mut engine = Engine::new();
    replay_on(&mut engine, &keys);
    let keypad = Keypad::new();

    let text = match config.format {
        OutputFormat::Json => output::to_json(&keypad.rows())?,
        OutputFormat::Text => output::render_keypad(&keypad, &engine, config.use_color()),
    };
    print(&text)
}

fn print(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
