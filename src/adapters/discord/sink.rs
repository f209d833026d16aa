//! Channel reply sink

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, Http, MessageId, Timestamp,
};

use crate::ports::chat::{Card, MessageRef, Reply, ReplyError, ReplySink};

/// Posts replies into the channel a message came from
#[derive(Clone)]
pub struct DiscordSink {
    http: Arc<Http>,
    channel: ChannelId,
}

impl DiscordSink {
    pub fn new(http: Arc<Http>, channel: ChannelId) -> Self {
        Self { http, channel }
    }
}

fn platform(e: serenity::Error) -> ReplyError {
    ReplyError::Platform(e.to_string())
}

#[async_trait]
impl ReplySink for DiscordSink {
    async fn send(&self, reply: Reply) -> Result<MessageRef, ReplyError> {
        let builder = match reply {
            Reply::Text(text) => CreateMessage::new().content(text),
            Reply::Card(card) => CreateMessage::new().embed(to_embed(&card)),
        };

        let posted = self
            .channel
            .send_message(&self.http, builder)
            .await
            .map_err(platform)?;

        Ok(MessageRef {
            channel_id: posted.channel_id.get(),
            message_id: posted.id.get(),
        })
    }

    async fn edit(&self, target: &MessageRef, reply: Reply) -> Result<(), ReplyError> {
        if target.channel_id == 0 || target.message_id == 0 {
            return Err(ReplyError::NotFound(target.message_id));
        }

        // Text replaces the card entirely, so drop any embeds
        let builder = match reply {
            Reply::Text(text) => EditMessage::new().content(text).embeds(Vec::new()),
            Reply::Card(card) => EditMessage::new().embed(to_embed(&card)),
        };

        ChannelId::new(target.channel_id)
            .edit_message(&self.http, MessageId::new(target.message_id), builder)
            .await
            .map_err(platform)?;

        Ok(())
    }
}

/// Render a card as a Discord embed
pub fn to_embed(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&card.title)
        .description(&card.description)
        .colour(card.color);

    for field in &card.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(footer) = &card.footer {
        let mut rendered = CreateEmbedFooter::new(&footer.text);
        if let Some(icon) = &footer.icon_url {
            rendered = rendered.icon_url(icon);
        }
        embed = embed.footer(rendered);
    }

    if let Some(at) = card.timestamp {
        if let Ok(ts) = Timestamp::from_unix_timestamp(at.timestamp()) {
            embed = embed.timestamp(ts);
        }
    }

    embed
}
