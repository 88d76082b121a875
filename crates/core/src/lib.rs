//! Privet core — shared library for the Privet Telegram bot.
//!
//! This crate holds everything that does not talk to Telegram:
//!
//! - `config`: environment-driven configuration statics
//! - `error`: centralized error types
//! - `logging`: logger initialization (console + file)
//! - `storage`: connection pool, schema migrations, user and setting
//!   operations

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use logging::init_logger;
pub use storage::{create_pool, get_connection, DbConnection, DbPool};
