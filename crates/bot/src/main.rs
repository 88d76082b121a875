use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use privet::cli::{Cli, Commands};
use privet::telegram::{create_bot, schema, setup_bot_commands, webhook_listener, HandlerDeps};
use privet_core::storage::db::count_users;
use privet_core::storage::{create_pool, get_connection};
use privet_core::{config, init_logger};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env before any Lazy config is read
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
        None => {
            // No command specified - default to running the bot
            log::info!("No command specified, running bot in long polling mode");
            run_bot(false).await
        }
    }
}

/// Run the Telegram bot
async fn run_bot(use_webhook: bool) -> Result<()> {
    log::info!("Starting bot...");

    // Create bot instance
    let bot = create_bot()?;

    let bot_info = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", bot_info.username, bot_info.id);

    // Register the command menu
    setup_bot_commands(&bot).await?;

    // Create database connection pool (runs migrations)
    let db_pool = Arc::new(
        create_pool(&config::DATABASE_PATH)
            .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?,
    );
    {
        let conn = get_connection(&db_pool)?;
        log::info!(
            "Database ready at {} ({} registered user(s))",
            config::DATABASE_PATH.as_str(),
            count_users(&conn)?
        );
    }

    // Create the dispatcher handler tree
    let handler = schema(HandlerDeps::new(Arc::clone(&db_pool)));

    if use_webhook {
        // Webhook mode
        let webhook_url = config::WEBHOOK_URL
            .clone()
            .ok_or_else(|| anyhow::anyhow!("WEBHOOK_URL environment variable must be set for webhook mode"))?;
        let url = url::Url::parse(&webhook_url)?;
        log::info!("Starting bot in webhook mode at {}", url);

        let listener = webhook_listener(bot.clone(), *config::WEBHOOK_PORT, url).await?;

        Dispatcher::builder(bot, handler)
            .dependencies(DependencyMap::new())
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the webhook update listener"),
            )
            .await;
    } else {
        // Long polling mode (default)
        use teloxide::update_listeners::Polling;

        log::info!("Starting bot in long polling mode");
        log::info!("📡 Ready to receive updates!");

        // Drop updates that queued up while the bot was down
        let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

        Dispatcher::builder(bot, handler)
            .dependencies(DependencyMap::new())
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    }

    Ok(())
}
