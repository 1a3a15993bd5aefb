//! Quick-entry line parser

use std::str::FromStr;

use once_cell::sync::OnceCell;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ParseError;
use crate::types::ParsedEntry;

/// Pattern-based parser for free-text expense lines such as `Uber 100 rs`
pub struct QuickEntryParser;

impl QuickEntryParser {
    /// Parse a free-text line into a description and amount.
    ///
    /// Tries, in order: description followed by an amount, an amount
    /// (behind a currency marker) followed by a description, and finally the
    /// first number found anywhere in the text. Returns `None` when no
    /// positive amount with a non-empty description can be extracted.
    pub fn parse(input: &str) -> Option<ParsedEntry> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        // Description amount [rs|rupees|₹]
        static TRAILING_AMOUNT: OnceCell<Regex> = OnceCell::new();
        let trailing = TRAILING_AMOUNT.get_or_init(|| {
            Regex::new(r"(?i)(.+?)\s+([0-9]+(?:\.[0-9]{1,2})?)\s*(?:rs|rupees?|₹)?$").unwrap()
        });
        if let Some(caps) = trailing.captures(input) {
            if let Some(entry) = Self::entry(&strip_currency_markers(&caps[1]), &caps[2]) {
                log::debug!("quick entry '{}' matched description-first form", input);
                return Some(entry);
            }
        }

        // ₹ amount description
        static LEADING_AMOUNT: OnceCell<Regex> = OnceCell::new();
        let leading = LEADING_AMOUNT.get_or_init(|| {
            Regex::new(r"(?i)^(?:₹|rs\.?|rupees?)\s*([0-9]+(?:\.[0-9]{1,2})?)\s+(.+)$").unwrap()
        });
        if let Some(caps) = leading.captures(input) {
            if let Some(entry) = Self::entry(&strip_currency_markers(&caps[2]), &caps[1]) {
                log::debug!("quick entry '{}' matched amount-first form", input);
                return Some(entry);
            }
        }

        Self::parse_loose(input)
    }

    /// Fallback: take the first number anywhere and treat the rest as description
    fn parse_loose(input: &str) -> Option<ParsedEntry> {
        static NUMBER: OnceCell<Regex> = OnceCell::new();
        let number = NUMBER.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]{1,2})?").unwrap());

        let found = number.find(input)?;
        let remainder = format!("{}{}", &input[..found.start()], &input[found.end()..]);
        let description = strip_currency_markers(&remainder);

        let entry = Self::entry(&description, found.as_str());
        if entry.is_some() {
            log::debug!("quick entry '{}' parsed by number fallback", input);
        } else {
            log::debug!("quick entry '{}' has no usable amount and description", input);
        }
        entry
    }

    fn entry(description: &str, amount: &str) -> Option<ParsedEntry> {
        let description = description.trim();
        let amount = Decimal::from_str(amount).ok()?;
        if description.is_empty() || amount <= Decimal::ZERO {
            return None;
        }
        Some(ParsedEntry {
            description: description.to_string(),
            amount,
        })
    }
}

/// Parse a quick-entry line, see [`QuickEntryParser::parse`]
pub fn parse_entry(input: &str) -> Option<ParsedEntry> {
    QuickEntryParser::parse(input)
}

/// Remove currency marker tokens and collapse the remaining whitespace
pub fn strip_currency_markers(text: &str) -> String {
    static MARKERS: OnceCell<Regex> = OnceCell::new();
    let markers = MARKERS.get_or_init(|| Regex::new(r"(?i)\b(?:rupees?|rs)\b\.?|₹").unwrap());

    markers
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an amount typed into the structured entry form
pub fn parse_amount(input: &str) -> Result<Decimal, ParseError> {
    let cleaned = strip_currency_markers(input).replace(',', "");
    let amount = Decimal::from_str(cleaned.trim()).map_err(|_| ParseError::InvalidAmount {
        input: input.to_string(),
        reason: "not a number".to_string(),
    })?;

    let amount = amount.round_dp(2);
    if amount <= Decimal::ZERO {
        return Err(ParseError::InvalidAmount {
            input: input.to_string(),
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Ok(amount)
}
