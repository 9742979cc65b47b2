//! Shared fixtures for the `runners` integration tests: a recording sink,
//! config and command-line builders, and a manager harness.

pub mod builders;
pub mod recording_sink;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use runners::config::ConfigFile;
use runners::engine::{ManagerOptions, RosterHandle, spawn_manager};
use runners::errors::Result;

use crate::recording_sink::RecordingSink;

/// Upper bound for any single async step in a test.
pub const TEST_DEADLINE: Duration = Duration::from_secs(5);

static TRACING: Once = Once::new();

/// Route `tracing` output through the test writer. `RUST_LOG` picks the
/// filter; `warn` otherwise, so roster records stay out of passing runs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `fut`, panicking if it outlives [`TEST_DEADLINE`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_DEADLINE, fut).await {
        Ok(out) => out,
        Err(_) => panic!("test step did not finish within {TEST_DEADLINE:?}"),
    }
}

/// A running manager whose records land in a [`RecordingSink`].
pub struct Harness {
    pub handle: RosterHandle,
    pub sink: RecordingSink,
    pub manager: JoinHandle<Result<()>>,
}

impl Harness {
    pub fn spawn(cfg: &ConfigFile) -> Self {
        init_tracing();
        let sink = RecordingSink::new();
        let (handle, manager) = spawn_manager(ManagerOptions::from_config(cfg), sink.clone());
        Self {
            handle,
            sink,
            manager,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::spawn(&ConfigFile::default())
    }
}
