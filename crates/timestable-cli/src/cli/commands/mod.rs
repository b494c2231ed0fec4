//! CLI command handlers.

pub mod config;
pub mod interactive;
pub mod snapshot;
