//! Dispatcher schema and update handlers

pub mod commands;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use commands::{help_text, ACK_TEXT, WELCOME_TEXT};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError, UserInfo};
