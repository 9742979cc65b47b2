// src/config/mod.rs

//! Configuration loading and validation for the roster daemon.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate the few invariants the runtime relies on (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ChannelSection, ConfigFile, ParserSection, RawConfigFile, RosterSection};
