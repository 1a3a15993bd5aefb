//! Report structures produced by the analytics engine

use std::collections::BTreeMap;

use chrono::NaiveDate;
use moneyvibe_config::{Period, SortOrder};
use moneyvibe_parser::{Category, YearMonth};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::Expense;
use super::types::{InsightKind, PageLink, Trend};

/// Totals for a selected set of expenses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    /// Total divided by the period's day count, rounded to 2 places
    pub average_per_day: Decimal,
    /// Day count used for the average
    pub days: i64,
}

/// Per-category amounts with every category present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals(BTreeMap<Category, Decimal>);

impl Default for CategoryTotals {
    fn default() -> Self {
        Self(Category::ALL.iter().map(|c| (*c, Decimal::ZERO)).collect())
    }
}

impl CategoryTotals {
    pub fn add(&mut self, category: Category, amount: Decimal) {
        *self.0.entry(category).or_insert(Decimal::ZERO) += amount;
    }

    pub fn get(&self, category: Category) -> Decimal {
        self.0.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Highest-spending category; ties go to the earliest in registry order
    pub fn top(&self) -> Option<(Category, Decimal)> {
        self.iter()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .fold(None, |best: Option<(Category, Decimal)>, (c, a)| match best {
                Some((_, best_amount)) if best_amount >= a => best,
                _ => Some((c, a)),
            })
    }

    /// Iterate in registry order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.0.iter().map(|(c, a)| (*c, *a))
    }
}

/// One slice of the category donut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Decimal,
    /// Whole percent of the breakdown total
    pub percent: u32,
    pub count: usize,
}

/// Non-zero categories with their share of the total
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub total: Decimal,
    pub shares: Vec<CategoryShare>,
}

/// A labelled bucket in a bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    /// First day covered by the bucket
    pub start: NaiveDate,
    pub amount: Decimal,
}

/// Spending on a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub count: usize,
}

/// Day-by-day movement for the line chart header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyMovement {
    /// Ascending by date, only days with spending
    pub days: Vec<DayTotal>,
    /// Amount on the most recent day with spending
    pub current: Decimal,
    /// Percent change against the previous day with spending, 1 decimal place
    pub change_percent: Decimal,
}

/// A narrative fact about a set of expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
}

/// One page of sorted expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Home screen totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub today: Decimal,
    pub yesterday: Decimal,
    /// Rolling seven days ending now
    pub week: Decimal,
    /// Current calendar month
    pub month: Decimal,
    /// Today's spending per category
    pub today_by_category: CategoryTotals,
    pub trend: Trend,
}

/// Everything the analytics screen asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub period: Period,
    pub category: Option<Category>,
    pub month: Option<YearMonth>,
    pub sort: SortOrder,
    pub page: usize,
    pub page_size: usize,
    /// Days shown by the movement chart
    pub trend_days: usize,
    /// Months shown by the monthly overview
    pub monthly_months: u32,
}

impl Default for AnalyticsQuery {
    fn default() -> Self {
        Self {
            period: Period::default(),
            category: None,
            month: None,
            sort: SortOrder::default(),
            page: 1,
            page_size: 10,
            trend_days: 14,
            monthly_months: 6,
        }
    }
}

/// Bundled analytics for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub title: String,
    pub summary: Summary,
    pub breakdown: CategoryBreakdown,
    pub trend: Vec<SeriesPoint>,
    pub movement: DailyMovement,
    pub monthly: Vec<SeriesPoint>,
    pub insights: Vec<Insight>,
    pub history: Page<Expense>,
    pub pages: Vec<PageLink>,
}
