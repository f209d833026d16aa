//! Report Layer - Turning records into chat replies
//!
//! - `format`: dollar and percentage formatting
//! - `links`: explorer / DEX quick links per chain
//! - `card`: loading, token, help and error replies

pub mod card;
pub mod format;
pub mod links;

pub use card::{error_text, info_card, loading_card, test_result_text, token_card};
pub use format::{format_number, format_percentage, shorten, NOT_AVAILABLE};
pub use links::{quick_links, render_links, QuickLink};
