//! Common types for the expense interpreter

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Result of interpreting a quick-entry line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub description: String,
    pub amount: Decimal,
}

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Food,
    Snacks,
    Shopping,
    Entertainment,
    Other,
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    /// Every category in registry order
    pub const ALL: [Category; 6] = [
        Category::Transport,
        Category::Food,
        Category::Snacks,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            Category::Transport => CategoryInfo { key: "transport", name: "Transport", icon: "fa-car", color: "#60a5fa" },
            Category::Food => CategoryInfo { key: "food", name: "Food", icon: "fa-utensils", color: "#fbbf24" },
            Category::Snacks => CategoryInfo { key: "snacks", name: "Snacks", icon: "fa-cookie-bite", color: "#f472b6" },
            Category::Shopping => CategoryInfo { key: "shopping", name: "Shopping", icon: "fa-shopping-bag", color: "#a78bfa" },
            Category::Entertainment => CategoryInfo { key: "entertainment", name: "Fun", icon: "fa-gamepad", color: "#34d399" },
            Category::Other => CategoryInfo { key: "other", name: "Other", icon: "fa-ellipsis-h", color: "#9ca3af" },
        }
    }

    /// Resolve a stored key, folding anything unknown into `Other`
    pub fn from_key_or_other(key: &str) -> Category {
        key.parse().unwrap_or(Category::Other)
    }

    /// Position in registry order
    pub fn index(&self) -> usize {
        match self {
            Category::Transport => 0,
            Category::Food => 1,
            Category::Snacks => 2,
            Category::Shopping => 3,
            Category::Entertainment => 4,
            Category::Other => 5,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    /// Accepts keys and display names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted || c.name().to_lowercase() == wanted)
            .ok_or_else(|| ParseError::InvalidCategory { input: s.to_string() })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A calendar month picked explicitly (the `custom` period)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ParseError> {
        if !(1..=12).contains(&month) {
            return Err(ParseError::InvalidMonth {
                input: format!("{}-{}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The month `n` months earlier
    pub fn minus_months(&self, n: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - n as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl std::str::FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMonth { input: s.to_string() };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("transport".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Fun".parse::<Category>().unwrap(), Category::Entertainment);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_key_folds_to_other() {
        assert_eq!(Category::from_key_or_other("bills"), Category::Other);
        assert_eq!(Category::from_key_or_other("snacks"), Category::Snacks);
    }

    #[test]
    fn test_registry_order_matches_index() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(Category::Entertainment.info().color, "#34d399");
    }

    #[test]
    fn test_category_serializes_as_key() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
    }

    #[test]
    fn test_year_month_parse() {
        let ym: YearMonth = "2026-03".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2026, month: 3 });
        assert_eq!(ym.to_string(), "2026-03");
        assert!("2026-13".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_year_month_serde_validates_month() {
        let ym: YearMonth = serde_json::from_str("\"2026-03\"").unwrap();
        assert_eq!(ym, YearMonth { year: 2026, month: 3 });
        assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2026-03\"");
        assert!(serde_json::from_str::<YearMonth>("\"2026-13\"").is_err());
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2026,"month":0}"#).is_err());
    }

    #[test]
    fn test_year_month_minus_months_wraps_year() {
        let ym = YearMonth { year: 2026, month: 2 };
        assert_eq!(ym.minus_months(1), YearMonth { year: 2026, month: 1 });
        assert_eq!(ym.minus_months(2), YearMonth { year: 2025, month: 12 });
        assert_eq!(ym.minus_months(14), YearMonth { year: 2024, month: 12 });
    }

    #[test]
    fn test_year_month_contains() {
        let ym = YearMonth { year: 2026, month: 10 };
        assert!(ym.contains(NaiveDate::from_ymd_opt(2026, 10, 31).unwrap()));
        assert!(!ym.contains(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()));
    }
}
