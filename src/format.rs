//! Display Formatting
//!
//! Pure helpers for cell text.

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for missing values
pub const DASH: &str = "-";

/// `2024-01-05T15:04:00Z` -> `Jan 5, 2024, 03:04 PM`, `-` when missing or
/// unparseable. Shown in the timestamp's own offset.
pub fn format_timestamp(raw: Option<&str>) -> String {
    const PATTERN: &str = "%b %-d, %Y, %I:%M %p";

    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return DASH.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(PATTERN).to_string();
    }
    // Naive timestamps without an offset
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.format(PATTERN).to_string())
        .unwrap_or_else(|_| DASH.to_string())
}

/// Whole numbers without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Number or `0` when missing
pub fn number_or_zero(value: Option<f64>) -> String {
    format_number(value.unwrap_or(0.0))
}

/// Text or a fallback when missing/blank
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
