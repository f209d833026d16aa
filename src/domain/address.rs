//! Address Classifier
//!
//! Scans raw chat text for token addresses and links.
//!
//! Three patterns are evaluated independently over the full text:
//! - Solana: 32-44 base58 characters (no `0`, `I`, `O`, `l`)
//! - EVM: `0x` followed by exactly 40 hex characters
//! - URL: `http://` or `https://` followed by a non-whitespace run
//!
//! Matches are reported in pattern order (Solana, EVM, URL), not in text order.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Base58 run bounded by word boundaries so it is never cut out of a longer token
const SOLANA_PATTERN: &str = r"\b[1-9A-HJ-NP-Za-km-z]{32,44}\b";
const EVM_PATTERN: &str = r"\b0x[a-fA-F0-9]{40}\b";
const URL_PATTERN: &str = r"https?://\S+";

static SOLANA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SOLANA_PATTERN).expect("solana pattern is valid"));
static EVM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EVM_PATTERN).expect("evm pattern is valid"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("url pattern is valid"));

static SOLANA_EXACT: LazyLock<Regex> = LazyLock::new(|| anchored(SOLANA_PATTERN));
static EVM_EXACT: LazyLock<Regex> = LazyLock::new(|| anchored(EVM_PATTERN));
static URL_EXACT: LazyLock<Regex> = LazyLock::new(|| anchored(URL_PATTERN));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("anchored pattern is valid")
}

/// Chain an address belongs to, as far as its shape tells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainKind {
    Solana,
    Evm,
    Url,
    Unknown,
}

impl ChainKind {
    /// Label shown to chat users
    pub fn label(&self) -> &'static str {
        match self {
            ChainKind::Solana => "Solana",
            ChainKind::Evm => "EVM (Ethereum/BSC)",
            ChainKind::Url => "URL",
            ChainKind::Unknown => "Unknown",
        }
    }

    /// Whether market data can be looked up for this kind
    pub fn is_token(&self) -> bool {
        matches!(self, ChainKind::Solana | ChainKind::Evm)
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A substring of a message that matched one of the address patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressMatch {
    pub raw_text: String,
    pub chain_kind: ChainKind,
}

impl AddressMatch {
    pub fn new(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let chain_kind = detect_address_type(&raw_text);
        Self { raw_text, chain_kind }
    }
}

/// Find every address or link in `text`.
///
/// Each pattern runs over the whole text; a message can produce several
/// matches, and the same address appearing twice produces two matches.
pub fn classify(text: &str) -> Vec<AddressMatch> {
    [&*SOLANA_RE, &*EVM_RE, &*URL_RE]
        .into_iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| AddressMatch::new(m.as_str()))
        .collect()
}

/// Classify a single, already isolated string by full match
pub fn detect_address_type(address: &str) -> ChainKind {
    if SOLANA_EXACT.is_match(address) {
        ChainKind::Solana
    } else if EVM_EXACT.is_match(address) {
        ChainKind::Evm
    } else if URL_EXACT.is_match(address) {
        ChainKind::Url
    } else {
        ChainKind::Unknown
    }
}
