// src/lib.rs

pub mod channel;
pub mod cli;
pub mod command;
pub mod config;
pub mod device;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod roster;
pub mod sink;
pub mod types;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::channel::{ChannelReply, join_command, send_line};
use crate::cli::{CliArgs, CliCommand};
use crate::config::{ConfigFile, load_or_default};
use crate::device::Device;
use crate::sink::TracingSink;

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    match args.command {
        CliCommand::Serve => serve(cfg).await,
        CliCommand::Send { args: words } => send(&cfg, &words).await,
    }
}

/// Load the config and apply command-line overrides.
pub fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = load_or_default(args.config.as_deref())?;
    if let Some(socket) = &args.socket {
        cfg.channel.socket_path = socket.clone();
    }
    if let Some(mode) = args.parse_mode {
        cfg.parser.mode = mode;
    }
    debug!(?cfg, "effective configuration");
    Ok(cfg)
}

/// `init`, wait for Ctrl-C, `teardown`.
async fn serve(cfg: ConfigFile) -> Result<()> {
    let device = Device::init(&cfg, TracingSink)?;

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received; unloading");

    device.teardown().await?;
    Ok(())
}

/// Front end: one line, one write.
async fn send(cfg: &ConfigFile, words: &[String]) -> Result<()> {
    let line = join_command(words);
    let reply = send_line(&cfg.channel.socket_path, &line).await?;

    println!("{reply}");
    if let ChannelReply::Rejected { kind, .. } = reply {
        bail!("command rejected by the roster daemon ({kind})");
    }
    Ok(())
}
