// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RunnersError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RunnersError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.channel, raw.parser, raw.roster))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_channel(cfg)?;
    validate_roster(cfg)?;
    Ok(())
}

fn validate_channel(cfg: &RawConfigFile) -> Result<()> {
    if cfg.channel.socket_path.as_os_str().is_empty() {
        return Err(RunnersError::ConfigError(
            "[channel].socket_path must not be empty".to_string(),
        ));
    }

    // One data byte plus the terminator is the smallest usable buffer.
    if cfg.channel.max_line_bytes < 2 {
        return Err(RunnersError::ConfigError(format!(
            "[channel].max_line_bytes must be >= 2 (got {})",
            cfg.channel.max_line_bytes
        )));
    }

    if cfg.channel.read_timeout_ms == 0 {
        return Err(RunnersError::ConfigError(
            "[channel].read_timeout_ms must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_roster(cfg: &RawConfigFile) -> Result<()> {
    if cfg.roster.max_text_bytes == 0 {
        return Err(RunnersError::ConfigError(
            "[roster].max_text_bytes must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
