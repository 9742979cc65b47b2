// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::sink::LogSink;

use super::core::RosterCore;
use super::{ManagerRequest, RuntimeEvent};

/// Async shell around [`RosterCore`].
///
/// Owns the core exclusively and processes one [`RuntimeEvent`] at a time:
/// apply, emit records, reply. Nothing else can reach the roster, so the
/// whole sequence is the exclusive section.
pub struct Runtime<S: LogSink> {
    core: RosterCore,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    sink: S,
}

impl<S: LogSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: LogSink> Runtime<S> {
    pub fn new(core: RosterCore, event_rx: mpsc::Receiver<RuntimeEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main loop. Returns after a `Shutdown` request, or once every handle
    /// is gone (the roster is drained in that case too).
    pub async fn run(mut self) -> Result<()> {
        info!("roster manager started");

        loop {
            let RuntimeEvent { request, reply } = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    let released = self.core.roster().len();
                    self.core.step(ManagerRequest::Shutdown)?;
                    info!(released, "all handles dropped; roster drained");
                    break;
                }
            };

            debug!(?request, "roster manager received request");

            let (outcome, keep_running) = match self.core.step(request) {
                Ok(step) => {
                    for record in &step.records {
                        self.sink.emit(record);
                    }
                    (Ok(step.ack), step.keep_running)
                }
                Err(err) => {
                    error!(error = %err, "command failed inside the roster manager");
                    (Err(err), true)
                }
            };

            // The caller may have stopped waiting; the command still applied.
            if reply.send(outcome).is_err() {
                debug!("submitter went away before the reply was sent");
            }

            if !keep_running {
                info!("shutdown requested; stopping roster manager");
                break;
            }
        }

        Ok(())
    }
}
