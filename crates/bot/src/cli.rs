use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "privet")]
#[command(author, version, about = "Telegram bot scaffold with a user registry and per-user settings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
