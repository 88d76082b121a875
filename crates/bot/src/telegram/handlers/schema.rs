//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_help_command, handle_other_message, handle_start_command};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::{Bot, Command};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Returns the handler tree used with teloxide's Dispatcher. The same
/// schema runs in production and in integration tests.
///
/// Each update is classified once into one of three branches: a recognized
/// command, a generic message, or a callback query.
///
/// # Arguments
/// * `deps` - Handler dependencies (database pool)
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        // Command handler must come before the generic message handler
        .branch(command_handler(deps))
        // Anything else that is a message gets the fixed acknowledgment
        .branch(message_handler())
        // Callback queries are acknowledged and dropped
        .branch(callback_handler())
}

/// Handler for bot commands (/start, /help)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => handle_start_command(&bot, &msg, &deps).await?,
                    Command::Help => handle_help_command(&bot, &msg).await?,
                }
                Ok(())
            }
        },
    ))
}

/// Handler for any other message (free text, media, unknown commands)
fn message_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(|bot: Bot, msg: Message| async move { handle_other_message(&bot, &msg).await })
}

/// Handler for callback queries: acknowledge and drop
fn callback_handler() -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(|bot: Bot, q: CallbackQuery| async move {
        bot.answer_callback_query(q.id).await?;
        Ok(())
    })
}
