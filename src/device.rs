// src/device.rs

//! Lifecycle: bring the roster manager and its channel up, and take them
//! down again.

use std::path::Path;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::channel::{self, ChannelServer};
use crate::config::ConfigFile;
use crate::engine::{ManagerOptions, RosterHandle, spawn_manager};
use crate::errors::Result;
use crate::sink::LogSink;

/// A registered channel plus the manager behind it.
#[derive(Debug)]
pub struct Device {
    handle: RosterHandle,
    manager: JoinHandle<Result<()>>,
    server: ChannelServer,
}

impl Device {
    /// Create an empty roster and register the channel at
    /// `[channel].socket_path`. Must run inside a Tokio runtime.
    pub fn init<S>(cfg: &ConfigFile, sink: S) -> Result<Self>
    where
        S: LogSink + 'static,
    {
        let (handle, manager) = spawn_manager(ManagerOptions::from_config(cfg), sink);
        let server = channel::serve(
            &cfg.channel.socket_path,
            handle.clone(),
            cfg.channel.read_timeout(),
        )?;

        info!(
            socket = %server.path().display(),
            max_line_bytes = cfg.channel.max_line_bytes,
            parse_mode = ?cfg.parser.mode,
            "roster device loaded and ready"
        );

        Ok(Self {
            handle,
            manager,
            server,
        })
    }

    pub fn handle(&self) -> &RosterHandle {
        &self.handle
    }

    pub fn socket_path(&self) -> &Path {
        self.server.path()
    }

    /// Drain the roster (serialized behind any in-flight command), wait for
    /// the manager to stop, then deregister the channel.
    ///
    /// Returns the number of runners released. The channel is deregistered
    /// even when the manager could not be drained.
    pub async fn teardown(self) -> Result<usize> {
        let drained = self.handle.shutdown().await;

        let stopped = match self.manager.await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "roster manager task ended abnormally");
                Ok(())
            }
        };

        self.server.close().await?;

        let released = drained?;
        stopped?;
        info!(released, "roster device unloaded");
        Ok(released)
    }
}
