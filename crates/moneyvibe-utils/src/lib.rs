//! Utility functions and helpers

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format an integer string with Indian digit grouping (12,34,567)
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{}{},{}", sign, groups.join(","), tail)
}

/// Format an amount with a currency symbol, e.g. `₹1,23,456.5`
///
/// The amount is rounded to `decimal_places` and trailing zeros are dropped.
pub fn format_currency(amount: Decimal, symbol: &str, decimal_places: u32) -> String {
    let rounded = amount.round_dp(decimal_places).normalize();
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", symbol, format_number(int_part), frac),
        None => format!("{}{}", symbol, format_number(int_part)),
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();
    first.to_uppercase().chain(rest.chars()).collect()
}

/// Generate an expense id from a timestamp, adding a suffix until `taken` accepts it
pub fn generate_id<F>(now: DateTime<Utc>, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = now.timestamp_millis().to_string();
    if !taken(&base) {
        return base;
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
