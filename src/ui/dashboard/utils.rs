//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use chrono::{Local, TimeZone};

/// Placeholder shown wherever a value is missing or underivable.
pub const PLACEHOLDER: &str = "N/A";

/// Derives the short model label: the second hyphen-delimited segment of the
/// model identifier, uppercased. Identifiers with no hyphen (or an empty
/// second segment) fall back to the placeholder instead of faulting.
pub fn short_model_label(model: &str) -> String {
    match model.split('-').nth(1) {
        Some(segment) if !segment.is_empty() => segment.to_uppercase(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Formats an epoch-milliseconds timestamp as a local wall-clock time.
pub fn format_local_time(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Truncates an identifier for display, appending an ellipsis when shortened.
pub fn truncate_id(id: &str, max_chars: usize) -> String {
    if id.chars().count() <= max_chars {
        id.to_string()
    } else {
        let kept: String = id.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Wraps free text into at most two display lines of the given width,
/// ellipsizing the second line when the text overflows. Visual truncation
/// only; the underlying data is untouched.
pub fn wrap_two_lines(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = flattened.chars().collect();
    if chars.len() <= width {
        return vec![flattened];
    }
    let first: String = chars[..width].iter().collect();
    let rest: String = chars[width..].iter().collect();
    if rest.chars().count() <= width {
        vec![first, rest]
    } else {
        let second: String = rest.chars().take(width.saturating_sub(1)).collect();
        vec![first, format!("{second}…")]
    }
}
