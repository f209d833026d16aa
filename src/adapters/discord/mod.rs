//! Discord Adapter
//!
//! Connects the message scanner to the Discord gateway via serenity:
//! - `handler`: gateway events into `IncomingMessage`s
//! - `sink`: `ReplySink` that posts and edits channel messages

mod handler;
mod sink;

pub use handler::{to_incoming, ScannerHandler};
pub use sink::{to_embed, DiscordSink};

use serenity::all::{Client, GatewayIntents};
use thiserror::Error;

use crate::application::MessageScanner;

/// Discord adapter errors
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Discord client error: {0}")]
    Client(#[from] serenity::Error),
}

/// Gateway intents needed to read message content in guilds and DMs
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Connect and process messages until the gateway connection ends
pub async fn run(token: &str, scanner: MessageScanner) -> Result<(), DiscordError> {
    let mut client = Client::builder(token, intents())
        .event_handler(ScannerHandler::new(scanner))
        .await?;

    tracing::info!("Connecting to Discord gateway...");
    client.start().await?;
    Ok(())
}
