//! Ficin CLI
//!
//! Interactive task tracker plus one-shot helpers for inspecting how a line
//! is interpreted and which configuration is in effect.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod console;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use application::{CommandParser, TaskService};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, InMemoryTaskList, JsonTaskStorage, init_logging};
use tracing::info;

/// Ficin CLI
#[derive(Parser)]
#[command(name = "ficin")]
#[command(author, version, about = "Ficin task tracker", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ficin.toml in the working directory)
    #[arg(short, long, global = true, env = "FICIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Run,

    /// Show how a single input line is interpreted
    ///
    /// Prints the command as JSON, or the error message with exit status 1.
    /// Example: ficin parse deadline return book /by 2024/01/15 1830
    Parse {
        /// The input line; multiple words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        line: Vec<String>,

        /// Date used for `today` and `tomorrow` (YYYY-MM-DD, default: local date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Without -v the configured level applies
    let filter = (cli.verbose > 0).then(|| log_filter_from_verbosity(cli.verbose));
    init_logging(&config.logging, filter)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_interactive(&config)?,
        Commands::Parse { line, today } => return Ok(parse_once(&line.join(" "), today)),
        Commands::Config => {
            let rendered = config.to_toml().context("Failed to render configuration")?;
            print!("{rendered}");
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    let storage = JsonTaskStorage::new(config.storage.data_path());
    let mut service = TaskService::new(InMemoryTaskList::new())
        .with_storage(Box::new(storage))
        .with_autosave(config.storage.autosave);

    let loaded = service
        .load_from_storage()
        .with_context(|| format!("Failed to load tasks from {}", config.storage.data_file))?;
    info!(loaded, data_file = %config.storage.data_file, "Starting session");

    let parser = CommandParser::new();
    let session = console::run_session(
        &mut service,
        &parser,
        &config.assistant_name,
        io::stdin().lock(),
        io::stdout().lock(),
    );
    info!(end = ?session.as_ref().ok(), "Session finished");

    // Save what was entered even if the console failed
    if !config.storage.autosave {
        service.save().context("Failed to save tasks")?;
    }
    session.context("Console session failed")?;
    Ok(())
}

fn parse_once(line: &str, today: Option<NaiveDate>) -> ExitCode {
    match interpret(line, today) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        },
    }
}

/// Interpret `line` and render the command as pretty JSON
fn interpret(line: &str, today: Option<NaiveDate>) -> Result<String, String> {
    let parser = today.map_or_else(CommandParser::new, CommandParser::with_reference_date);
    let command = parser.parse(line).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&command).map_err(|e| e.to_string())
}
