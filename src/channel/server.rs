// src/channel/server.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::channel::ChannelReply;
use crate::engine::RosterHandle;
use crate::errors::{Result, RunnersError};

/// A bound, running channel endpoint.
#[derive(Debug)]
pub struct ChannelServer {
    path: PathBuf,
    stop_tx: Option<oneshot::Sender<()>>,
    accept_loop: JoinHandle<()>,
}

impl ChannelServer {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop accepting, wait for the accept loop, remove the socket file.
    pub async fn close(mut self) -> Result<()> {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Err(err) = (&mut self.accept_loop).await {
            warn!(error = %err, "channel accept loop ended abnormally");
        }
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        info!(path = %self.path.display(), "channel deregistered");
        Ok(())
    }
}

/// Bind `path` and start accepting writers. A stale socket file left at
/// `path` is replaced. A writer that has not finished its payload within
/// `read_timeout` gets a `transfer-fault` status and is disconnected.
pub fn serve(
    path: impl Into<PathBuf>,
    handle: RosterHandle,
    read_timeout: Duration,
) -> Result<ChannelServer> {
    let path = path.into();

    if path.exists() {
        std::fs::remove_file(&path)?;
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let listener = UnixListener::bind(&path)?;
    info!(path = %path.display(), "channel registered");

    let (stop_tx, stop_rx) = oneshot::channel();
    let accept_loop = tokio::spawn(accept_loop(listener, handle, read_timeout, stop_rx));

    Ok(ChannelServer {
        path,
        stop_tx: Some(stop_tx),
        accept_loop,
    })
}

async fn accept_loop(
    listener: UnixListener,
    handle: RosterHandle,
    read_timeout: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            _ = &mut stop_rx => {
                debug!("channel accept loop stopping");
                break;
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _addr)) => {
                        let handle = handle.clone();
                        tokio::spawn(async move {
                            if let Err(err) = serve_connection(stream, handle, read_timeout).await {
                                debug!(error = %err, "failed to answer channel writer");
                            }
                        });
                    }
                    Err(err) => warn!(error = %err, "failed to accept channel connection"),
                }
            }
        }
    }
}

/// One connection is one write: read the payload, apply it, answer.
async fn serve_connection(
    mut stream: UnixStream,
    handle: RosterHandle,
    read_timeout: Duration,
) -> Result<()> {
    let read = tokio::time::timeout(read_timeout, read_payload(&mut stream, handle.max_line_bytes()));
    let outcome = match read.await {
        Ok(Ok(payload)) => handle.write(&payload).await,
        Ok(Err(err)) => Err(err),
        Err(_) => Err(RunnersError::TransferFault(format!(
            "payload not complete after {read_timeout:?}"
        ))),
    };

    let reply = match &outcome {
        Ok(n) => ChannelReply::Accepted(*n),
        Err(err) => {
            debug!(error = %err, "channel write rejected");
            ChannelReply::from(err)
        }
    };

    stream.write_all(format!("{reply}\n").as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Read until EOF, but never more than `capacity` bytes. Reaching the
/// capacity is enough for the handle to reject the payload, so the rest is
/// never copied.
async fn read_payload(stream: &mut UnixStream, capacity: usize) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(capacity);
    (&mut *stream)
        .take(capacity as u64)
        .read_to_end(&mut payload)
        .await
        .map_err(|err| RunnersError::TransferFault(err.to_string()))?;
    Ok(payload)
}
