//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod webhook;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Bot, Command};
pub use handlers::{help_text, schema, HandlerDeps, HandlerError, UserInfo, ACK_TEXT, WELCOME_TEXT};
pub use webhook::webhook_listener;
