//! Token Scout - Discord token scanner bot
//!
//! Detects token addresses in chat and replies with live market data.

use anyhow::Result;

use token_scout::adapters::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (BOT_TOKEN goes here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app).await
}
