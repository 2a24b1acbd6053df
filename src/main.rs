/*============================================================
  Synavera Project: Syn-Log
  Module: synlog::main
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Operator entry point for Syn-Log. Appends entries to a log
    file and prints the newest entries back.

  Security / Safety Notes:
    Operates within user privileges on a single log path.

  Dependencies:
    clap for CLI parsing, tracing-subscriber for diagnostics,
    serde_json for machine-readable tail output.

  Operational Scope:
    Invoked by operators and shell tooling that need to write
    to or inspect a Syn-Log file.

  Revision History:
    2025-11-02 COD  Authored Syn-Log operator binary.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Configurable execution via CLI and config file
============================================================*/

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use synlog_core::{Result, SynlogConfig, SynlogError};

/// Command-line arguments for Syn-Log.
#[derive(Debug, Parser)]
#[command(
    name = "Syn-Log",
    version,
    author = "Synavera Systems",
    about = "Leveled append-only log writer and tail reader"
)]
struct Cli {
    /// Override configuration file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Explicit log file path.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
    /// Environment tag written into each entry.
    #[arg(long, value_name = "ENV")]
    env: Option<String>,
    /// Write threshold level name.
    #[arg(long, value_name = "LEVEL")]
    level: Option<String>,
    /// Report threshold level name (NONE disables reporting).
    #[arg(long, value_name = "LEVEL")]
    report_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Append one entry.
    Write {
        /// Level tag; custom tags are accepted verbatim.
        #[arg(long, default_value = "INFO")]
        level: String,
        message: String,
    },
    /// Print the newest entries, newest first.
    Tail {
        #[arg(default_value_t = 10)]
        count: usize,
        /// Emit a JSON array instead of plain text.
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Print the resolved log path.
    Path,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "synlog_core=warn".into()),
        )
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[Syn-Log] {}", err);
            err.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = SynlogConfig::load_from_optional_path(cli.config.as_deref())?;
    if let Some(path) = cli.log {
        config.log.path = Some(path);
    }
    if let Some(env) = cli.env {
        config.log.env = env;
    }
    if let Some(level) = cli.level {
        config.log.level = level;
    }
    if let Some(level) = cli.report_level {
        config.log.report_level = level;
    }

    match cli.command {
        Command::Path => {
            println!("{}", config.log_path().display());
        }
        Command::Write { level, message } => {
            let logger = config.open_logger()?;
            if let Some(entry) = logger.write(&message, &level)? {
                println!("{entry}");
            }
        }
        Command::Tail { count, json } => {
            let logger = config.open_logger()?;
            let entries = logger.get_log(count)?;
            if json {
                let rendered = serde_json::to_string_pretty(&entries).map_err(|err| {
                    SynlogError::Serialization(format!("Failed to encode entries: {err}"))
                })?;
                println!("{rendered}");
            } else {
                for entry in entries {
                    println!("{entry}");
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
