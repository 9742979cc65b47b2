#![allow(dead_code)]

use runners::config::ConfigFile;

pub use runners_test_utils::builders::{AddLineBuilder, ConfigFileBuilder};
pub use runners_test_utils::recording_sink::RecordingSink;
pub use runners_test_utils::{Harness, init_tracing, with_timeout};

pub fn spawn_recorded(cfg: &ConfigFile) -> Harness {
    Harness::spawn(cfg)
}

pub fn spawn_default() -> Harness {
    Harness::default()
}
