//! Message Flow Integration Tests
//!
//! Drive `MessageScanner` end to end with a canned fetcher and a recording sink:
//! 1. Classification -> loading card -> resolution -> edited token card
//! 2. Per-address isolation of reply failures
//! 3. `test` / `info` commands
//!
//! All tests are deterministic (no real network calls).

mod common;

use std::sync::Arc;

use common::{CannedResponse, RecordingSink, SinkEvent, StaticFetcher};
use serde_json::json;
use token_scout::application::{MarketDataResolver, MessageScanner};
use token_scout::ports::chat::{Author, Card, IncomingMessage, MessageRef, Reply, ReplyError, ReplySink};
use token_scout::report::card::{
    COLOR_DOWN, COLOR_LOADING, COLOR_NO_DATA, COLOR_UP, FIELD_CHAIN, FIELD_DATA_MISSING, FIELD_LINKS,
    FIELD_MARKET_DATA, FIELD_URL_WARNING,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const BONK: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
const PEPE: &str = "0x6982508145454Ce325dDbE47a25d4ec3d2311933";

fn message(content: &str) -> IncomingMessage {
    IncomingMessage {
        author: Author {
            id: 1001,
            display_name: "degen".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/1001/abc.png".to_string()),
            is_bot: false,
        },
        channel_id: 77,
        content: content.to_string(),
    }
}

fn scanner(fetcher: &StaticFetcher) -> MessageScanner {
    MessageScanner::new(Arc::new(MarketDataResolver::new(Arc::new(fetcher.clone()))))
}

/// Fetcher that knows Bonk on DexScreener and PEPE on CoinGecko
fn market_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with_json(
            &format!("/tokens/{}", BONK),
            json!({
                "pairs": [{
                    "baseToken": {"name": "Bonk", "symbol": "Bonk"},
                    "priceUsd": "0.00002093",
                    "volume": {"h24": 412733.18},
                    "liquidity": {"usd": 1843201.77},
                    "fdv": 1860120443,
                    "marketCap": 1612337900,
                    "priceChange": {"h1": -0.84, "h24": 3.27}
                }]
            }),
        )
        .with_json(&format!("/tokens/{}", PEPE), json!({"pairs": null}))
        .with_json(
            "/simple/token_price/ethereum",
            json!({
                PEPE.to_lowercase(): {
                    "usd": 0.00001187,
                    "usd_24h_change": -2.4518,
                    "usd_24h_vol": 812334901.2,
                    "usd_market_cap": 4993876123.41
                }
            }),
        )
}

fn cards(replies: &[Reply]) -> Vec<&Card> {
    replies
        .iter()
        .filter_map(|r| match r {
            Reply::Card(card) => Some(card),
            Reply::Text(_) => None,
        })
        .collect()
}

// ============================================================================
// Scanning
// ============================================================================

#[tokio::test]
async fn test_mixed_message_answers_every_match_in_order() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    let text = format!("{} vs {} see https://dexscreener.com/x", BONK, PEPE);
    scanner(&fetcher).handle_message(&message(&text), &sink).await;

    let replies = sink.final_replies();
    let cards = cards(&replies);
    assert_eq!(cards.len(), 3);

    // Solana first, then EVM, then URL
    assert_eq!(cards[0].title, "🪙 Bonk (Bonk)");
    assert_eq!(cards[0].color, COLOR_UP);
    assert_eq!(cards[0].get_field(FIELD_CHAIN).unwrap().value, "**Solana**");

    assert_eq!(cards[1].title, "🪙 Unknown Token (UNKNOWN)");
    assert_eq!(cards[1].color, COLOR_DOWN);
    assert!(cards[1].get_field(FIELD_MARKET_DATA).unwrap().value.contains("$0.00001187"));

    assert!(cards[2].get_field(FIELD_URL_WARNING).is_some());
    assert!(cards[2].get_field(FIELD_LINKS).is_none());

    // No loading card left behind
    assert!(cards.iter().all(|c| c.color != COLOR_LOADING));
}

#[tokio::test]
async fn test_each_loading_card_is_edited_into_its_result() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message(&format!("{} {}", BONK, PEPE)), &sink).await;

    let events = sink.events();
    assert_eq!(events.len(), 4);

    let mut sent = Vec::new();
    for event in &events {
        match event {
            SinkEvent::Sent(at, Reply::Card(card)) => {
                assert_eq!(card.color, COLOR_LOADING);
                sent.push(*at);
            }
            SinkEvent::Edited(at, Reply::Card(_)) => {
                assert_eq!(sent.last(), Some(at), "edit must target the latest loading card");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_duplicate_addresses_resolve_twice() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message(&format!("{} and again {}", BONK, BONK)), &sink).await;

    assert_eq!(fetcher.count_calls(&format!("/tokens/{}", BONK)), 2);
    assert_eq!(cards(&sink.final_replies()).len(), 2);
}

#[tokio::test]
async fn test_unreachable_apis_still_produce_cards() {
    let fetcher = StaticFetcher::new()
        .with_route("/tokens/", CannedResponse::Timeout)
        .with_route("price", CannedResponse::Status(502))
        .with_route("/token/meta", CannedResponse::Status(429));
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message(BONK), &sink).await;

    let replies = sink.final_replies();
    let cards = cards(&replies);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].color, COLOR_NO_DATA);
    assert!(cards[0].get_field(FIELD_DATA_MISSING).is_some());
    assert!(cards[0].footer.as_ref().unwrap().text.contains("degen"));
}

/// Sink whose first edit fails, later ones succeed
#[derive(Default)]
struct FlakySink {
    inner: RecordingSink,
    failed_once: std::sync::atomic::AtomicBool,
}

#[async_trait::async_trait]
impl ReplySink for FlakySink {
    async fn send(&self, reply: Reply) -> Result<MessageRef, ReplyError> {
        self.inner.send(reply).await
    }

    async fn edit(&self, target: &MessageRef, reply: Reply) -> Result<(), ReplyError> {
        if !self.failed_once.swap(true, std::sync::atomic::Ordering::SeqCst) {
            return Err(ReplyError::Platform("embed too large".to_string()));
        }
        self.inner.edit(target, reply).await
    }
}

#[tokio::test]
async fn test_reply_failure_is_isolated_per_address() {
    let fetcher = market_fetcher();
    let sink = FlakySink::default();

    scanner(&fetcher).handle_message(&message(&format!("{} {}", BONK, PEPE)), &sink).await;

    let replies = sink.inner.final_replies();
    assert_eq!(replies.len(), 2);

    // First address: the card edit failed, the error replaced the loading card
    match &replies[0] {
        Reply::Text(text) => {
            assert!(text.starts_with(&format!("❌ Error processing Solana address: `{}`", BONK)));
            assert!(text.contains("embed too large"));
        }
        other => panic!("expected error text, got {:?}", other),
    }

    // Second address unaffected
    match &replies[1] {
        Reply::Card(card) => assert_eq!(card.get_field(FIELD_CHAIN).unwrap().value, "**EVM (Ethereum/BSC)**"),
        other => panic!("expected card, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bot_messages_are_ignored() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();
    let mut msg = message(BONK);
    msg.author.is_bot = true;

    scanner(&fetcher).handle_message(&msg, &sink).await;

    assert!(sink.events().is_empty());
    assert!(fetcher.get_calls().is_empty());
}

// ============================================================================
// Commands
// ============================================================================

#[tokio::test]
async fn test_info_command_is_not_scanned() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message(&format!("!info {}", BONK)), &sink).await;

    let replies = sink.final_replies();
    assert_eq!(replies.len(), 1);
    assert!(matches!(&replies[0], Reply::Card(c) if c.title == "🤖 Token Scanner Bot Help"));
    assert!(fetcher.get_calls().is_empty());
}

#[tokio::test]
async fn test_test_command_for_evm() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message(&format!("!test {}", PEPE)), &sink).await;

    let replies = sink.final_replies();
    assert_eq!(replies.len(), 2);
    assert_eq!(
        replies[0],
        Reply::Text(format!("🧪 Testing EVM (Ethereum/BSC) address: `{}`", PEPE))
    );
    match &replies[1] {
        Reply::Text(dump) => {
            assert!(dump.starts_with("📊 Test Result: ```json\n"));
            assert!(dump.contains("\"found\": true"));
            assert!(dump.contains("\"marketCapUsd\": 4993876123.41"));
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[tokio::test]
async fn test_test_command_rejects_urls() {
    let fetcher = market_fetcher();
    let sink = RecordingSink::new();

    scanner(&fetcher).handle_message(&message("!test https://example.com"), &sink).await;

    assert_eq!(
        sink.final_replies(),
        vec![
            Reply::Text("🧪 Testing URL address: `https://example.com`".to_string()),
            Reply::Text("❌ Invalid address type!".to_string()),
        ]
    );
}
