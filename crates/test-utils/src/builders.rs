#![allow(dead_code)]

use std::path::Path;

use runners::config::{ConfigFile, RawConfigFile};
use runners::types::ParseMode;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn socket_path(mut self, path: &Path) -> Self {
        self.config.channel.socket_path = path.to_path_buf();
        self
    }

    pub fn max_line_bytes(mut self, bytes: usize) -> Self {
        self.config.channel.max_line_bytes = bytes;
        self
    }

    pub fn read_timeout_ms(mut self, millis: u64) -> Self {
        self.config.channel.read_timeout_ms = millis;
        self
    }

    pub fn max_text_bytes(mut self, bytes: usize) -> Self {
        self.config.roster.max_text_bytes = bytes;
        self
    }

    pub fn strict(mut self) -> Self {
        self.config.parser.mode = ParseMode::Strict;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ADD` command lines.
#[derive(Debug, Clone)]
pub struct AddLineBuilder {
    lane: String,
    bib: String,
    name: String,
    school: String,
    qualifier: String,
    record: String,
}

impl AddLineBuilder {
    pub fn new(bib: i32) -> Self {
        Self {
            lane: "1".to_string(),
            bib: bib.to_string(),
            name: format!("Runner{bib}"),
            school: "Central".to_string(),
            qualifier: "12.00".to_string(),
            record: "11.50".to_string(),
        }
    }

    pub fn lane(mut self, lane: i32) -> Self {
        self.lane = lane.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn school(mut self, school: &str) -> Self {
        self.school = school.to_string();
        self
    }

    pub fn qualifier(mut self, time: &str) -> Self {
        self.qualifier = time.to_string();
        self
    }

    pub fn record(mut self, time: &str) -> Self {
        self.record = time.to_string();
        self
    }

    /// The line as the front end would send it, newline included.
    pub fn build(self) -> String {
        format!(
            "ADD {} {} {} {} {} {}\n",
            self.lane, self.bib, self.name, self.school, self.qualifier, self.record
        )
    }
}
