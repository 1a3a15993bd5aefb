//! Core data models for the expense book

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use moneyvibe_parser::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque identifier, compared as a string
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    /// Human-readable description (first letter capitalised)
    pub description: String,
    /// Positive amount with at most two decimal places
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    /// Spending category
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    /// When the expense was recorded
    #[serde(default = "invalid_timestamp", deserialize_with = "lenient_timestamp")]
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        id: String,
        description: String,
        amount: Decimal,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            date,
        }
    }

    /// Calendar date of the expense in the given timezone
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.date.with_timezone(tz).date_naive()
    }

    /// True when the stored timestamp could not be read and fell back to the epoch
    pub fn has_invalid_date(&self) -> bool {
        self.date == invalid_timestamp()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!("{} - {} ({})", self.date.format("%Y-%m-%d %H:%M"), self.description, self.category)
    }
}

/// A validated manual entry, ready to become an [`Expense`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: Decimal, category: Category) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
        }
    }

    /// Check the structured-entry invariants, returning the normalised entry
    pub fn validate(self) -> CoreResult<Self> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError {
                message: "description must not be empty".to_string(),
            });
        }

        let amount = self.amount.round_dp(2);
        if amount <= Decimal::ZERO {
            return Err(CoreError::ValidationError {
                message: format!("amount must be greater than zero, got {}", self.amount),
            });
        }

        Ok(Self {
            description: description.to_string(),
            amount,
            category: self.category,
        })
    }
}

// ==================== Lenient decoding ====================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Int(i64),
    Float(f64),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        RawScalar::Int(n) => n.to_string(),
        RawScalar::Float(f) => f.to_string(),
    })
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(key) = Option::<RawScalar>::deserialize(deserializer)? else {
        log::warn!("expense without a category folded into other");
        return Ok(Category::Other);
    };
    let key = match key {
        RawScalar::Text(s) => s,
        RawScalar::Int(n) => n.to_string(),
        RawScalar::Float(f) => f.to_string(),
    };
    let category = Category::from_key_or_other(&key);
    if category == Category::Other && !key.eq_ignore_ascii_case("other") {
        log::warn!("unknown category '{}' folded into other", key);
    }
    Ok(category)
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<RawScalar>::deserialize(deserializer)? {
        Some(RawScalar::Text(s)) => parse_timestamp(&s),
        Some(RawScalar::Int(ms)) => Utc.timestamp_millis_opt(ms).single(),
        Some(RawScalar::Float(ms)) => Utc.timestamp_millis_opt(ms as i64).single(),
        None => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        log::warn!("unreadable expense timestamp, using the Unix epoch");
        invalid_timestamp()
    }))
}

/// Stand-in for timestamps that could not be read: the Unix epoch
pub fn invalid_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// Parse the timestamp shapes found in stored expense data.
///
/// RFC 3339 is canonical. Zone-less `YYYY-MM-DD HH:MM:SS`, ISO without offset
/// and bare dates are read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
