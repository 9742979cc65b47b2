// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::ParseMode;

/// Command-line arguments for `runners`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runners",
    version,
    about = "Keep a race roster in a long-lived daemon, fed through a write-only command channel.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNNERS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Runners.toml` in the current working directory if present,
    /// built-in defaults otherwise.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Channel socket path; overrides `[channel].socket_path`.
    #[arg(long, value_name = "PATH", global = true)]
    pub socket: Option<PathBuf>,

    /// What to do with lines that do not parse (lenient, strict); overrides
    /// `[parser].mode`.
    #[arg(long, value_name = "MODE", value_parser = parse_mode_arg, global = true)]
    pub parse_mode: Option<ParseMode>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Run the roster daemon until Ctrl-C.
    Serve,

    /// Send one command, e.g. `send ADD 3 101 Ana Lincoln 12.34 11.00`.
    Send {
        /// Command keyword followed by its fields.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn parse_mode_arg(s: &str) -> Result<ParseMode, String> {
    s.parse()
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
