//! Basic types for the analytics engine

use moneyvibe_config::Period;
use serde::{Deserialize, Serialize};

/// Bucket granularity for trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "count")]
pub enum BucketUnit {
    /// The last `n` calendar days, today included
    Day(u32),
    /// The last `n` calendar months, the current one included
    Month(u32),
}

impl BucketUnit {
    /// Bucket layout used for a period's trend chart
    pub fn for_period(period: Period) -> Self {
        match period {
            Period::Week => BucketUnit::Day(7),
            Period::Month => BucketUnit::Day(30),
            Period::Year => BucketUnit::Month(12),
            Period::All | Period::Custom => BucketUnit::Day(7),
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            BucketUnit::Day(n) | BucketUnit::Month(n) => *n,
        }
    }
}

/// Today's spending compared with yesterday's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "direction", content = "percent")]
pub enum Trend {
    /// Spent more today, by the given whole percent
    Up(u32),
    /// Spent less today, by the given whole percent
    Down(u32),
    /// Same amount as yesterday
    Same,
    /// Nothing was spent yesterday
    NoData,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up(p) => write!(f, "↑ {}% vs yesterday", p),
            Trend::Down(p) => write!(f, "↓ {}% vs yesterday", p),
            Trend::Same => write!(f, "Same as yesterday"),
            Trend::NoData => write!(f, "No data for yesterday"),
        }
    }
}

/// Kinds of narrative insight, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    TopCategory,
    AverageTransaction,
    LargestExpense,
    DailyAverage,
}

impl InsightKind {
    /// Presentation tone: "high", "info" or "good"
    pub fn tone(&self) -> &'static str {
        match self {
            InsightKind::TopCategory => "high",
            InsightKind::AverageTransaction | InsightKind::LargestExpense => "info",
            InsightKind::DailyAverage => "good",
        }
    }
}

/// One entry in a pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Gap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_unit_for_period() {
        assert_eq!(BucketUnit::for_period(Period::Week), BucketUnit::Day(7));
        assert_eq!(BucketUnit::for_period(Period::Month), BucketUnit::Day(30));
        assert_eq!(BucketUnit::for_period(Period::Year), BucketUnit::Month(12));
        assert_eq!(BucketUnit::for_period(Period::All).count(), 7);
    }

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::Up(25).to_string(), "↑ 25% vs yesterday");
        assert_eq!(Trend::NoData.to_string(), "No data for yesterday");
    }
}
