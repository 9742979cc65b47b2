// src/channel/client.rs

use std::io;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tracing::debug;

use crate::channel::ChannelReply;
use crate::errors::{Result, RunnersError};

/// Join the keyword and its fields with single spaces and terminate the line
/// with a newline, the way the front end always sends it.
pub fn join_command<S: AsRef<str>>(args: &[S]) -> String {
    let mut line = args
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}

/// Perform exactly one write on the channel at `socket` and return the
/// server's status.
pub async fn send_line(socket: &Path, line: &str) -> Result<ChannelReply> {
    let mut stream = UnixStream::connect(socket).await?;
    debug!(socket = %socket.display(), bytes = line.len(), "writing command");

    // An oversized line is answered after `capacity` bytes, and the server
    // hangs up on whatever is still in flight. The status is already queued
    // for us by then, so a broken pipe here is not the caller's error.
    match stream.write_all(line.as_bytes()).await {
        Ok(()) => {
            if let Err(err) = stream.shutdown().await {
                debug!(error = %err, "shutdown of write half failed");
            }
        }
        Err(err) if is_hangup(&err) => {
            debug!(error = %err, "server closed the channel before the full line was sent");
        }
        Err(err) => return Err(err.into()),
    }

    // Only the first line matters; the server may reset the connection
    // right after it when part of the payload was left unread.
    let mut status = String::new();
    BufReader::new(stream).read_line(&mut status).await?;

    status
        .parse()
        .map_err(|e: String| RunnersError::Other(anyhow::anyhow!(e)))
}

fn is_hangup(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionReset
    )
}
