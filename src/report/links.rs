//! Explorer and DEX Links
//!
//! Quick-access links built by substituting the address into fixed templates.

use crate::domain::ChainKind;

const ADDRESS_SLOT: &str = "{address}";

const SOLANA_LINKS: &[(&str, &str)] = &[
    ("📊 Solscan", "https://solscan.io/token/{address}"),
    ("🐦 Birdeye", "https://birdeye.so/token/{address}"),
    ("📈 DexScreener", "https://dexscreener.com/solana/{address}"),
    ("💹 Jupiter", "https://jup.ag/swap/SOL-{address}"),
];

const EVM_LINKS: &[(&str, &str)] = &[
    ("📊 Etherscan", "https://etherscan.io/address/{address}"),
    ("🛠️ DexTools", "https://www.dextools.io/app/en/ether/pair-explorer/{address}"),
    ("📈 DexScreener", "https://dexscreener.com/ethereum/{address}"),
    ("🦄 Uniswap", "https://app.uniswap.org/#/tokens/ethereum/{address}"),
];

/// A labelled link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub url: String,
}

/// Links for `address` on `chain`. URLs and unknown strings get none.
pub fn quick_links(chain: ChainKind, address: &str) -> Vec<QuickLink> {
    let templates: &[(&str, &str)] = match chain {
        ChainKind::Solana => SOLANA_LINKS,
        ChainKind::Evm => EVM_LINKS,
        ChainKind::Url | ChainKind::Unknown => &[],
    };

    templates
        .iter()
        .map(|&(label, template)| QuickLink {
            label,
            url: template.replace(ADDRESS_SLOT, address),
        })
        .collect()
}

/// Render links as markdown separated by bullets
pub fn render_links(links: &[QuickLink]) -> String {
    links
        .iter()
        .map(|l| format!("[{}]({})", l.label, l.url))
        .collect::<Vec<_>>()
        .join(" • ")
}
