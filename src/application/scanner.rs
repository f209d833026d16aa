//! Message Scanner
//!
//! Entry point for every chat message: runs the `test` / `info` commands, or
//! classifies the text and answers each detected address with a loading card
//! that is edited into the final token card once the resolver returns.
//!
//! Addresses are handled one at a time in classifier order. A failure while
//! replying for one address is reported inline and does not affect the others.

use std::sync::Arc;

use chrono::Utc;

use super::resolver::MarketDataResolver;
use crate::config::Config;
use crate::domain::{classify, detect_address_type, AddressMatch, ChainKind};
use crate::ports::chat::{Author, IncomingMessage, MessageRef, Reply, ReplyError, ReplySink};
use crate::ports::http::JsonFetcher;
use crate::report::card::{
    error_text, info_card, invalid_address_text, loading_card, missing_address_text,
    test_header_text, test_result_text, token_card,
};

pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// A recognised bot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `test [address]`
    Test(Option<&'a str>),
    /// `info`
    Info,
}

/// Handles incoming messages against a resolver
#[derive(Clone)]
pub struct MessageScanner {
    resolver: Arc<MarketDataResolver>,
    prefix: String,
}

impl MessageScanner {
    pub fn new(resolver: Arc<MarketDataResolver>) -> Self {
        Self::with_prefix(resolver, DEFAULT_COMMAND_PREFIX)
    }

    pub fn with_prefix(resolver: Arc<MarketDataResolver>, prefix: impl Into<String>) -> Self {
        Self {
            resolver,
            prefix: prefix.into(),
        }
    }

    /// Build the scanner and its resolver from configuration
    pub fn from_config(config: &Config, fetcher: Arc<dyn JsonFetcher>) -> Self {
        let resolver = MarketDataResolver::from_config(fetcher, &config.sources, config.http.timeout());
        Self::with_prefix(Arc::new(resolver), config.bot.command_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolver(&self) -> &MarketDataResolver {
        &self.resolver
    }

    /// Parse `content` as a command. Unknown commands are not commands.
    pub fn parse_command<'a>(&self, content: &'a str) -> Option<Command<'a>> {
        let rest = content.trim().strip_prefix(self.prefix.as_str())?;
        let mut words = rest.split_whitespace();

        match words.next()? {
            "test" => Some(Command::Test(words.next())),
            "info" => Some(Command::Info),
            _ => None,
        }
    }

    /// Handle one incoming message.
    ///
    /// Bot authors are ignored. A recognised `test`/`info` command is run and
    /// the message is not scanned for addresses, so `!test <addr>` answers with
    /// the raw record only and no token card.
    pub async fn handle_message(&self, message: &IncomingMessage, sink: &dyn ReplySink) {
        if message.author.is_bot {
            return;
        }

        if let Some(command) = self.parse_command(&message.content) {
            tracing::debug!("Command from {}: {:?}", message.author.display_name, command);
            self.run_command(command, sink).await;
            return;
        }

        let matches = classify(&message.content);
        if matches.is_empty() {
            return;
        }

        tracing::debug!(
            "Found {} match(es) in message from {}",
            matches.len(),
            message.author.display_name
        );

        for m in &matches {
            self.answer_match(m, &message.author, sink).await;
        }
    }

    /// Loading card, resolve, then edit into the final card
    async fn answer_match(&self, m: &AddressMatch, author: &Author, sink: &dyn ReplySink) {
        tracing::info!("Processing {} address: {}", m.chain_kind.label(), m.raw_text);

        let placeholder = match sink.send(Reply::Card(loading_card(m))).await {
            Ok(placeholder) => placeholder,
            Err(e) => {
                self.report_failure(m, None, &e, sink).await;
                return;
            }
        };

        let record = self.resolver.resolve(&m.raw_text, m.chain_kind).await;
        let card = token_card(m, &record, author, Utc::now());

        if let Err(e) = sink.edit(&placeholder, Reply::Card(card)).await {
            self.report_failure(m, Some(&placeholder), &e, sink).await;
        }
    }

    async fn report_failure(
        &self,
        m: &AddressMatch,
        placeholder: Option<&MessageRef>,
        cause: &ReplyError,
        sink: &dyn ReplySink,
    ) {
        tracing::warn!("Reply failed for {}: {}", m.raw_text, cause);
        let text = Reply::Text(error_text(m, cause));

        let delivered = match placeholder {
            Some(target) => sink.edit(target, text).await,
            None => sink.send(text).await.map(|_| ()),
        };

        if let Err(e) = delivered {
            tracing::error!("Could not report failure for {}: {}", m.raw_text, e);
        }
    }

    async fn run_command(&self, command: Command<'_>, sink: &dyn ReplySink) {
        let result = match command {
            Command::Info => sink.send(Reply::Card(info_card(&self.prefix))).await.map(|_| ()),
            Command::Test(address) => self.run_test(address, sink).await,
        };

        if let Err(e) = result {
            tracing::error!("Command reply failed: {}", e);
        }
    }

    async fn run_test(&self, address: Option<&str>, sink: &dyn ReplySink) -> Result<(), ReplyError> {
        let Some(address) = address else {
            sink.send(Reply::Text(missing_address_text())).await?;
            return Ok(());
        };

        let chain = detect_address_type(address);
        sink.send(Reply::Text(test_header_text(address, chain))).await?;

        if !matches!(chain, ChainKind::Solana | ChainKind::Evm) {
            sink.send(Reply::Text(invalid_address_text())).await?;
            return Ok(());
        }

        let record = self.resolver.resolve(address, chain).await;
        let text = match test_result_text(&record) {
            Ok(text) => text,
            Err(e) => format!("❌ Could not render result: {}", e),
        };
        sink.send(Reply::Text(text)).await?;
        Ok(())
    }
}
