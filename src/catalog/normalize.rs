//! Field normalization shared by the catalog tables.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Extracts the first run of ASCII digits, e.g. `"100A"` -> `100`.
pub fn leading_digits(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parses integral values, accepting float spellings such as `800.0`.
pub fn parse_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Parses a list price, tolerating currency symbols and thousands separators.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}
