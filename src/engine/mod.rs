// src/engine/mod.rs

//! Roster manager.
//!
//! A single runtime task owns the [`Roster`](crate::roster::Roster) and
//! applies requests one at a time, so every command runs to completion before
//! the next one starts. Callers never touch the roster; they hold a
//! [`RosterHandle`] and await the reply to each submission.
//!
//! The pure state machine lives in [`core`]; the async shell that reads
//! requests and forwards records to the log sink is [`runtime`]; the
//! caller-facing side, including the channel-boundary checks, is [`handle`].

use tokio::sync::oneshot;

use crate::command::Command;
use crate::errors::Result;

/// Something the manager is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerRequest {
    Apply(Command),
    /// Drain and release every runner, then stop.
    Shutdown,
}

/// What the manager reports back once a request finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Applied,
    Drained(usize),
}

/// A request plus the channel its completion is reported on.
#[derive(Debug)]
pub struct RuntimeEvent {
    pub request: ManagerRequest,
    pub reply: oneshot::Sender<Result<Ack>>,
}

pub mod core;
pub mod handle;
pub mod runtime;

pub use self::core::{CoreStep, RosterCore};
pub use handle::{ManagerOptions, RosterHandle, spawn_manager};
pub use runtime::Runtime;
