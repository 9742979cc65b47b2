// src/logging.rs

//! Diagnostic output for the daemon and the front end.
//!
//! The filter comes from `--log-level` when given, otherwise from the
//! `RUNNERS_LOG` environment variable, which takes full `EnvFilter` syntax
//! (`runners=info,runners::channel=debug`). Without either, `info` is used,
//! which is exactly the level roster records are emitted at.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

const LOG_ENV: &str = "RUNNERS_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(cli_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn filter_for(cli_level: Option<LogLevel>) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level.directive()),
        // An unparseable RUNNERS_LOG falls back to the default.
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}
