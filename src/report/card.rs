//! Reply Cards
//!
//! Builds the platform-neutral cards the bot posts: the loading placeholder,
//! the final token summary, the help card and the plain-text replies of the
//! `test` command.

use std::fmt::Display;

use chrono::{DateTime, Utc};

use super::format::{format_number, format_percentage, shorten};
use super::links::{quick_links, render_links};
use crate::domain::{AddressMatch, ChainKind, TokenMarketRecord};
use crate::ports::chat::{Author, Card};

pub const COLOR_LOADING: u32 = 0xffaa00;
pub const COLOR_UP: u32 = 0x00ff88;
pub const COLOR_DOWN: u32 = 0xff6b6b;
pub const COLOR_NEUTRAL: u32 = 0x5865f2;
pub const COLOR_NO_DATA: u32 = 0x808080;

pub const FIELD_STATUS: &str = "⏳ Status";
pub const FIELD_MARKET_DATA: &str = "💰 Market Data";
pub const FIELD_PERFORMANCE: &str = "⏰ Performance";
pub const FIELD_DATA_FOUND: &str = "✅ Data Status";
pub const FIELD_DATA_MISSING: &str = "❌ Data Status";
pub const FIELD_REASONS: &str = "ℹ️ Possible Reasons";
pub const FIELD_SAFETY: &str = "🛡️ Safety Reminders";
pub const FIELD_LINKS: &str = "🔗 Quick Access";
pub const FIELD_URL_WARNING: &str = "🌐 URL Detected";
pub const FIELD_CHAIN: &str = "⛓️ Blockchain";

/// Placeholder posted while sources are queried
pub fn loading_card(m: &AddressMatch) -> Card {
    Card::new(
        "🔄 Fetching Real-Time Token Data...",
        format!(
            "**Address:** `{}`\n**Chain:** {}",
            shorten(&m.raw_text, 20, 10),
            m.chain_kind.label()
        ),
        COLOR_LOADING,
    )
    .field(FIELD_STATUS, "Scanning multiple APIs for live data...", false)
}

/// Color by 24h direction when data was found, grey otherwise
pub fn card_color(record: &TokenMarketRecord) -> u32 {
    if !record.found {
        COLOR_NO_DATA
    } else if record.price_change_24h_pct > 0.0 {
        COLOR_UP
    } else if record.price_change_24h_pct < 0.0 {
        COLOR_DOWN
    } else {
        COLOR_NEUTRAL
    }
}

/// Final summary for one detected address
pub fn token_card(m: &AddressMatch, record: &TokenMarketRecord, requester: &Author, at: DateTime<Utc>) -> Card {
    let mut card = Card::new(
        format!("🪙 {} ({})", record.name, record.symbol),
        format!("**Contract:** `{}`", shorten(&m.raw_text, 25, 15)),
        card_color(record),
    );

    match m.chain_kind {
        ChainKind::Solana | ChainKind::Evm => {
            card = if record.found {
                found_fields(card, m.chain_kind, record)
            } else {
                missing_fields(card, m.chain_kind)
            };

            if m.chain_kind == ChainKind::Solana {
                card = card.field(
                    FIELD_SAFETY,
                    "⚠️ **Always verify contracts**\n🔒 **Check for mint/freeze authority**\n\
                     💧 **Verify liquidity is locked**\n🚨 **DYOR before investing**",
                    false,
                );
            }

            card = card.field(FIELD_LINKS, render_links(&quick_links(m.chain_kind, &m.raw_text)), false);
        }
        ChainKind::Url => {
            card = card.field(
                FIELD_URL_WARNING,
                "⚠️ **Warning:** Web URL detected\n🔒 **Safety:** Always verify domains\n\
                 🛡️ **Tip:** Only click official links\n🚨 **Never connect wallet to suspicious sites**",
                false,
            );
        }
        ChainKind::Unknown => {}
    }

    card.field(FIELD_CHAIN, format!("**{}**", m.chain_kind.label()), true)
        .footer(
            format!(
                "👤 Requested by {} • 🤖 Live Token Scanner • 📡 Real-time Data",
                requester.display_name
            ),
            requester.avatar_url.clone(),
        )
        .timestamp(at)
}

fn found_fields(card: Card, chain: ChainKind, record: &TokenMarketRecord) -> Card {
    let mut market = format!("💵 **Price:** {}", format_number(Some(record.price_usd)));
    if record.market_cap_usd > 0.0 {
        market.push_str(&format!("\n🏆 **MCap:** {}", format_number(Some(record.market_cap_usd))));
    }
    if chain == ChainKind::Solana && record.fully_diluted_valuation_usd > 0.0 {
        market.push_str(&format!(
            "\n🔥 **FDV:** {}",
            format_number(Some(record.fully_diluted_valuation_usd))
        ));
    }
    if record.liquidity_usd > 0.0 {
        market.push_str(&format!("\n🏊 **Liquidity:** {}", format_number(Some(record.liquidity_usd))));
    }
    if record.volume_24h_usd > 0.0 {
        market.push_str(&format!("\n📈 **Volume 24h:** {}", format_number(Some(record.volume_24h_usd))));
    }

    let mut performance = String::new();
    if record.price_change_1h_pct != 0.0 {
        performance.push_str(&format!("🕐 **1H:** {}\n", format_percentage(record.price_change_1h_pct)));
    }
    if record.price_change_24h_pct != 0.0 {
        performance.push_str(&format!("📅 **24H:** {}\n", format_percentage(record.price_change_24h_pct)));
    }
    performance.push_str("📆 **7D:** Coming soon");

    card.field(FIELD_MARKET_DATA, market, true)
        .field(FIELD_PERFORMANCE, performance, true)
        .field(
            FIELD_DATA_FOUND,
            "🟢 **Live Data Found**\n📊 Multiple APIs verified\n⚡ Real-time pricing",
            true,
        )
}

fn missing_fields(card: Card, chain: ChainKind) -> Card {
    let second_row = match chain {
        ChainKind::Solana => "🔥 **FDV:** Not Available",
        _ => "🏆 **MCap:** Not Available",
    };
    let market = format!(
        "💵 **Price:** Not Available\n{}\n🏊 **Liquidity:** Not Available\n📈 **Volume:** Not Available",
        second_row
    );

    card.field(FIELD_MARKET_DATA, market, true)
        .field(
            FIELD_REASONS,
            "🔸 Very new token\n🔸 Low trading volume\n🔸 Not listed on DEXs\n🔸 Invalid contract address",
            true,
        )
        .field(
            FIELD_DATA_MISSING,
            "🔴 **No Live Data**\n📊 Token not found in APIs\n⚠️ Verify contract address",
            true,
        )
}

/// Static help card for the `info` command
pub fn info_card(prefix: &str) -> Card {
    Card::new(
        "🤖 Token Scanner Bot Help",
        "I automatically scan messages for token addresses and provide real-time data!",
        COLOR_NEUTRAL,
    )
    .field(
        "🔍 Supported Formats",
        "• **Solana:** Base58 addresses (32-44 chars)\n• **Ethereum/BSC:** 0x addresses (42 chars)\n\
         • **URLs:** Web links (safety warnings)",
        false,
    )
    .field(
        "📊 Data Provided",
        "• Real-time price & market cap\n• 24h volume & liquidity\n• Price changes (1h/24h)\n\
         • Direct links to explorers",
        false,
    )
    .field(
        "🛠️ Commands",
        format!(
            "• `{p}test <address>` - Test token data fetching\n• `{p}info` - Show this information",
            p = prefix
        ),
        false,
    )
    .field(
        "⚡ Usage",
        "Just paste any token address in chat and I'll automatically scan it!",
        false,
    )
}

/// Inline error for an address whose reply could not be produced
pub fn error_text(m: &AddressMatch, error: &dyn Display) -> String {
    format!(
        "❌ Error processing {} address: `{}`\nError: {}",
        m.chain_kind.label(),
        m.raw_text,
        error
    )
}

pub fn missing_address_text() -> String {
    "❌ Please provide a token address to test!".to_string()
}

pub fn invalid_address_text() -> String {
    "❌ Invalid address type!".to_string()
}

pub fn test_header_text(address: &str, chain: ChainKind) -> String {
    format!("🧪 Testing {} address: `{}`", chain.label(), address)
}

/// Raw record dump for the `test` command
pub fn test_result_text(record: &TokenMarketRecord) -> Result<String, serde_json::Error> {
    Ok(format!("📊 Test Result: ```json\n{}```", serde_json::to_string_pretty(record)?))
}
