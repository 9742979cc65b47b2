// src/engine/handle.rs

//! Caller side of the roster manager.
//!
//! [`RosterHandle::write`] is the analogue of one `write(2)` on the channel:
//! it enforces the buffer bound, parses the line outside the exclusive
//! section, submits the command and waits until the manager finished it.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::command::CommandParser;
use crate::config::ConfigFile;
use crate::errors::{Result, RunnersError};
use crate::sink::LogSink;
use crate::types::ParseMode;

use super::core::RosterCore;
use super::runtime::Runtime;
use super::{Ack, ManagerRequest, RuntimeEvent};

const REQUEST_QUEUE: usize = 64;

/// Knobs the handle needs at the channel boundary.
#[derive(Debug, Clone, Copy)]
pub struct ManagerOptions {
    /// Buffer capacity; payloads of this length or longer are rejected.
    pub max_line_bytes: usize,
    pub parse_mode: ParseMode,
    pub max_text_bytes: usize,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self::from_config(&ConfigFile::default())
    }
}

impl ManagerOptions {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            max_line_bytes: cfg.channel.max_line_bytes,
            parse_mode: cfg.parser.mode,
            max_text_bytes: cfg.roster.max_text_bytes,
        }
    }
}

/// Cloneable submitter. Any number of tasks may hold one concurrently.
#[derive(Debug, Clone)]
pub struct RosterHandle {
    tx: mpsc::Sender<RuntimeEvent>,
    parser: CommandParser,
    max_line_bytes: usize,
    parse_mode: ParseMode,
}

impl RosterHandle {
    fn new(tx: mpsc::Sender<RuntimeEvent>, options: ManagerOptions) -> Self {
        Self {
            tx,
            parser: CommandParser::new(options.max_text_bytes),
            max_line_bytes: options.max_line_bytes,
            parse_mode: options.parse_mode,
        }
    }

    pub fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Submit one command line and wait for it to be fully applied.
    ///
    /// Returns the number of bytes accepted. Lines that do not parse are
    /// accepted and dropped in lenient mode, and fail with
    /// `MalformedCommand` in strict mode.
    pub async fn write(&self, payload: &[u8]) -> Result<usize> {
        if payload.len() >= self.max_line_bytes {
            return Err(RunnersError::InvalidArgument {
                len: payload.len(),
                capacity: self.max_line_bytes,
            });
        }

        if self.tx.is_closed() {
            return Err(RunnersError::ManagerStopped);
        }

        let command = match self.parser.parse_bytes(payload) {
            Ok(command) => command,
            Err(err) => match self.parse_mode {
                ParseMode::Lenient => {
                    debug!(error = %err, "dropping unparseable command");
                    return Ok(payload.len());
                }
                ParseMode::Strict => return Err(err.into()),
            },
        };

        debug!(keyword = command.keyword(), "submitting command");
        self.submit(ManagerRequest::Apply(command)).await?;
        Ok(payload.len())
    }

    /// Ask the manager to drain the roster and stop. Returns how many runners
    /// were released. Commands queued before this one are applied first.
    pub async fn shutdown(&self) -> Result<usize> {
        match self.submit(ManagerRequest::Shutdown).await? {
            Ack::Drained(released) => Ok(released),
            Ack::Applied => Ok(0),
        }
    }

    async fn submit(&self, request: ManagerRequest) -> Result<Ack> {
        let (reply, done) = oneshot::channel();
        self.tx
            .send(RuntimeEvent { request, reply })
            .await
            .map_err(|_| RunnersError::ManagerStopped)?;

        // A dropped reply means the manager stopped before reaching us.
        done.await.map_err(|_| RunnersError::ManagerStopped)?
    }
}

/// Spawn the manager task on the current Tokio runtime.
///
/// The roster starts empty. The join handle resolves when the manager stops.
pub fn spawn_manager<S>(options: ManagerOptions, sink: S) -> (RosterHandle, JoinHandle<Result<()>>)
where
    S: LogSink + 'static,
{
    let (tx, rx) = mpsc::channel::<RuntimeEvent>(REQUEST_QUEUE);
    let runtime = Runtime::new(RosterCore::new(), rx, sink);
    let join = tokio::spawn(runtime.run());
    (RosterHandle::new(tx, options), join)
}
