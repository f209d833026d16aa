//! Chat Port
//!
//! Platform-neutral view of incoming messages and outgoing replies.
//! The Discord adapter converts to and from these types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Who sent a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_bot: bool,
}

/// A message delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author: Author,
    pub channel_id: u64,
    pub content: String,
}

/// Handle to a message the bot has posted, used to edit it later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: u64,
    pub message_id: u64,
}

/// One name/value row of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Card footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

/// Rich reply, rendered as an embed on Discord
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<CardField>,
    pub footer: Option<CardFooter>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            ..Default::default()
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(CardFooter { text: text.into(), icon_url });
        self
    }

    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Look up a field by name
    pub fn get_field(&self, name: &str) -> Option<&CardField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Something the bot posts
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Card(Card),
}

/// Errors from posting or editing a reply
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Platform rejected the reply: {0}")]
    Platform(String),

    #[error("Message not found: {0}")]
    NotFound(u64),
}

/// Where replies for one conversation go
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Post a new message
    async fn send(&self, reply: Reply) -> Result<MessageRef, ReplyError>;

    /// Replace the content of a message previously posted through `send`
    async fn edit(&self, target: &MessageRef, reply: Reply) -> Result<(), ReplyError>;
}
