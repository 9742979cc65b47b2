// src/roster/mod.rs

//! The roster itself: the runner record, the ordered container that owns
//! every runner, and the diagnostic records emitted while mutating it.
//!
//! Nothing in here is synchronized. Exclusive access is provided by the
//! engine, which is the only owner of a [`Roster`] at runtime.

pub mod record;
pub mod runner;
pub mod store;

pub use record::LogRecord;
pub use runner::Runner;
pub use store::Roster;
