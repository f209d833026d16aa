//! Numeric Coercion
//!
//! Upstream market APIs disagree on how they encode numbers: some send JSON
//! numbers, some send strings, and most send `null` or drop the field when
//! they have nothing. Every upstream numeric field goes through here.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to `f64`, treating null, missing or unparseable as zero
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Serde adapter for [`coerce_f64`].
///
/// Use together with `#[serde(default)]` so a missing field also lands on zero.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_f64).unwrap_or(0.0))
}

/// Serde adapter for optional text fields: null, non-string and blank values become `None`
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}
