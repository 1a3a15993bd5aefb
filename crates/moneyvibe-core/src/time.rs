//! Period selection for filtering expenses by date
//!
//! All calendar questions (what is "today", which month a record falls in)
//! are answered in the timezone of the `now` value passed by the caller.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use moneyvibe_config::Period;
use moneyvibe_parser::{Category, YearMonth};

use crate::models::Expense;

/// Analytics filter: a period, an optional category and an optional picked month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodSelector {
    /// Active period
    pub period: Period,
    /// Restrict to one category (`None` means all)
    pub category: Option<Category>,
    /// Month used by `Period::Custom`
    pub month: Option<YearMonth>,
}

/// Resolved temporal window for a selector at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Records at or after this instant
    Since(DateTime<Utc>),
    /// Records in this calendar month
    Month(YearMonth),
    /// Records in this calendar year
    Year(i32),
    /// No temporal filter
    Any,
}

impl PeriodSelector {
    /// Create a selector for a period with no category filter
    pub fn new(period: Period) -> Self {
        Self {
            period,
            category: None,
            month: None,
        }
    }

    /// Select one explicit calendar month
    pub fn custom(month: YearMonth) -> Self {
        Self {
            period: Period::Custom,
            category: None,
            month: Some(month),
        }
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_month(mut self, month: Option<YearMonth>) -> Self {
        self.month = month;
        self
    }

    /// Resolve the temporal window relative to `now`
    pub fn window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Window {
        let today = now.date_naive();
        match self.period {
            Period::Week => Window::Since(week_start(now)),
            Period::Month => Window::Month(YearMonth::of(today)),
            Period::Year => Window::Year(today.year()),
            Period::Custom => match self.month {
                Some(month) => Window::Month(month),
                None => Window::Any,
            },
            Period::All => Window::Any,
        }
    }

    /// Check whether an expense passes both the category and period filters
    pub fn contains<Tz: TimeZone>(&self, expense: &Expense, now: &DateTime<Tz>) -> bool {
        self.matches_category(expense) && expense.in_window(&self.window(now), &now.timezone())
    }

    fn matches_category(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category == c)
    }

    /// Get a human-readable description of the selection
    pub fn description<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String {
        let period = match self.window(now) {
            Window::Since(_) => "Last 7 Days".to_string(),
            Window::Month(month) => month
                .first_day()
                .map(|d| d.format("%B %Y").to_string())
                .unwrap_or_else(|| month.to_string()),
            Window::Year(year) => year.to_string(),
            Window::Any => "All Time".to_string(),
        };
        match self.category {
            Some(category) => format!("{} · {}", period, category.name()),
            None => period,
        }
    }
}

/// Time filtering trait
pub trait TimeFilter {
    /// Check membership in a resolved window, reading calendar dates in `tz`
    fn in_window<Tz: TimeZone>(&self, window: &Window, tz: &Tz) -> bool;
}

impl TimeFilter for Expense {
    fn in_window<Tz: TimeZone>(&self, window: &Window, tz: &Tz) -> bool {
        match window {
            Window::Since(start) => self.date >= *start,
            Window::Month(month) => month.contains(self.local_date(tz)),
            Window::Year(year) => self.local_date(tz).year() == *year,
            Window::Any => true,
        }
    }
}

/// Midnight at the start of `date` in `tz`, as a UTC instant
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Lower bound of the analytics week: start of today minus seven days, inclusive
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    start_of_day(now.date_naive(), &now.timezone()) - Duration::days(7)
}

/// Filter expenses by category first, then by period
pub fn select_by_period<Tz: TimeZone>(
    expenses: &[Expense],
    selector: &PeriodSelector,
    now: &DateTime<Tz>,
) -> Vec<Expense> {
    let window = selector.window(now);
    let tz = now.timezone();
    let selected: Vec<Expense> = expenses
        .iter()
        .filter(|e| selector.matches_category(e))
        .filter(|e| e.in_window(&window, &tz))
        .cloned()
        .collect();
    log::debug!(
        "selected {} of {} expenses for {:?}",
        selected.len(),
        expenses.len(),
        window
    );
    selected
}
