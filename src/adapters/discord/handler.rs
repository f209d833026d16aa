//! Gateway event handler

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use super::sink::DiscordSink;
use crate::application::MessageScanner;
use crate::ports::chat::{Author, IncomingMessage};

/// Forwards every message event to the scanner
pub struct ScannerHandler {
    scanner: MessageScanner,
}

impl ScannerHandler {
    pub fn new(scanner: MessageScanner) -> Self {
        Self { scanner }
    }
}

#[async_trait]
impl EventHandler for ScannerHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = to_incoming(&msg);
        let sink = DiscordSink::new(ctx.http.clone(), msg.channel_id);
        self.scanner.handle_message(&incoming, &sink).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            "{} is online in {} guild(s), prefix {:?}",
            ready.user.name,
            ready.guilds.len(),
            self.scanner.prefix()
        );
    }
}

/// Platform-neutral view of a Discord message
pub fn to_incoming(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        author: Author {
            id: msg.author.id.get(),
            display_name: msg.author.display_name().to_string(),
            avatar_url: msg.author.avatar_url(),
            is_bot: msg.author.bot,
        },
        channel_id: msg.channel_id.get(),
        content: msg.content.clone(),
    }
}
