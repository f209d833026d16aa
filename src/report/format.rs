//! Number Formatting
//!
//! Dollar amounts with magnitude suffixes and signed, colored percentages.

/// Shown in place of a missing or zero figure
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a USD amount.
///
/// `None`, zero and non-finite values are "not available". Large values get
/// K/M/B suffixes; sub-dollar prices keep 8 decimals so micro-caps stay legible.
pub fn format_number(value: Option<f64>) -> String {
    let num = match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return NOT_AVAILABLE.to_string(),
    };

    if num >= 1_000_000_000.0 {
        format!("${:.2}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("${:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("${:.2}K", num / 1_000.0)
    } else if num >= 1.0 {
        format!("${:.4}", num)
    } else {
        format!("${:.8}", num)
    }
}

/// Format a percentage change with sign and a green/red marker
pub fn format_percentage(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0.00%".to_string();
    }

    let formatted = format!("{:+.2}%", value);
    if value > 0.0 {
        format!("🟢 {}", formatted)
    } else {
        format!("🔴 {}", formatted)
    }
}

/// Shorten long text to `head...tail` (char-safe)
pub fn shorten(text: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= head + tail {
        return text.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}
