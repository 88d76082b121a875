//! Command and message handler implementations (/start, /help, free text)

use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use super::types::{register_user, HandlerDeps, HandlerError, UserInfo};
use crate::telegram::bot::{Bot, Command};

/// Fixed reply to /start, sent after the user row is written.
pub const WELCOME_TEXT: &str = "👋 Privet! You're registered. Send /help to see what I can do.";

/// Fixed reply to any message that is not a known command.
pub const ACK_TEXT: &str = "Got it 👌 I only understand commands for now — try /help.";

/// Static command-list reply to /help, rendered from the command menu
/// descriptions.
pub fn help_text() -> String {
    Command::descriptions().to_string()
}

/// Handle /start command
///
/// Upserts the sender into the user registry, then replies with the fixed
/// welcome string. The upsert must complete before the reply is sent; a
/// persistence failure propagates out of the handler unhandled.
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let info = UserInfo::from_message(msg);
    let user = register_user(&deps.db_pool, &info)?;

    log::info!(
        "🎯 /start from telegram_id={} (row id {}, username {:?})",
        info.telegram_id,
        user.id,
        user.username
    );

    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    Ok(())
}

/// Handle /help command. No state access.
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, help_text()).await?;
    Ok(())
}

/// Handle any non-command message. No state access.
pub(super) async fn handle_other_message(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, ACK_TEXT).await?;
    Ok(())
}
