//! IBAN CLI - normalize, format and compare bank account numbers

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{compare, config, format, logs, parse};

/// iban - normalize, format and compare IBANs
#[derive(Parser)]
#[command(name = "iban", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an IBAN and show its parts
    Parse {
        /// Account number, whitespace allowed
        iban: String,
        /// Bank identifier code
        #[arg(long)]
        bic: Option<String>,
        /// Bank name
        #[arg(long)]
        bank_name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an IBAN in groups of four characters
    Format {
        /// Account number, whitespace allowed
        iban: String,
        /// Group separator (defaults to the configured one)
        #[arg(short, long, allow_hyphen_values = true)]
        separator: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare an IBAN with another value
    Compare {
        /// Account number, whitespace allowed
        iban: String,
        /// Other value as JSON, e.g. '{"iban": "FI64 5687 6285 8198 43"}'
        other: String,
        /// Bank identifier code of the first value
        #[arg(long)]
        bic: Option<String>,
        /// Bank name of the first value
        #[arg(long)]
        bank_name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse { iban, bic, bank_name, json } => {
            parse::run(&iban, bic.as_deref(), bank_name.as_deref(), json)
        }
        Commands::Format { iban, separator, json } => format::run(&iban, separator.as_deref(), json),
        Commands::Compare { iban, other, bic, bank_name, json } => {
            compare::run(&iban, &other, bic.as_deref(), bank_name.as_deref(), json)
        }
        Commands::Config { command } => config::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
