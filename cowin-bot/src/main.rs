//! cowin-bot binary: `run` starts the Telegram bot, `query` prints one command's table.

use clap::Parser;
use cowin_bot::cli::{Cli, Commands};
use cowin_bot::runner::{query_from_env, run_bot};
use cowin_bot::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Query { text } => {
            let output = query_from_env(&text).await?;
            println!("{}", output);
            Ok(())
        }
    }
}
