//! Privet — Telegram bot scaffold with a user registry and per-user settings.
//!
//! The library exposes the dispatcher schema and handlers so integration
//! tests can drive the exact handler tree the binary runs.
//!
//! # Module Structure
//!
//! - `cli`: command-line interface
//! - `telegram`: bot construction, dispatcher schema, handlers, webhook

pub mod cli;
pub mod telegram;

// Re-export commonly used types for convenience
pub use telegram::{create_bot, schema, Bot, Command, HandlerDeps};
