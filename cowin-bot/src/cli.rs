//! Command-line interface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cowin-bot", version, about = "Telegram bot for CoWIN vaccination slots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot until Ctrl-C
    Run {
        /// Bot token (overrides BOT_TOKEN)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run one command against the provider and print the table, e.g. `query "/states"`
    Query {
        /// Command text as it would be typed in the chat
        text: String,
    },
}
