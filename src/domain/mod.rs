//! Domain Layer - Core logic for the token scanner
//!
//! Pure types and functions with no I/O. All external interactions happen
//! through the ports layer.
//!
//! - `address`: classify chat text into Solana / EVM / URL matches
//! - `record`: the normalized market record and per-source patches
//! - `coerce`: lenient numeric coercion for upstream JSON

pub mod address;
pub mod coerce;
pub mod record;

pub use address::{classify, detect_address_type, AddressMatch, ChainKind};
pub use coerce::{coerce_f64, lenient_f64, lenient_string};
pub use record::{TokenMarketRecord, TokenPatch, UNKNOWN_TOKEN_NAME, UNKNOWN_TOKEN_SYMBOL};
