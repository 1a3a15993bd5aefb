//! Aggregation and analytics over expense snapshots
//!
//! Every function here is pure: it reads a slice of expenses and a `now`
//! instant and returns a fresh report. Calendar days and months are taken in
//! the timezone carried by `now`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use moneyvibe_config::{CurrencyConfig, Period, SortOrder};
use moneyvibe_parser::YearMonth;
use moneyvibe_utils::format_currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Expense;
use crate::reports::{
    AnalyticsQuery, AnalyticsReport, CategoryBreakdown, CategoryShare, CategoryTotals, Dashboard,
    DailyMovement, DayTotal, Insight, Page, SeriesPoint, Summary,
};
use crate::time::{select_by_period, PeriodSelector};
use crate::types::{BucketUnit, InsightKind, PageLink, Trend};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn round(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole percent of `part` in `whole`, zero when `whole` is zero
fn percent_of(part: Decimal, whole: Decimal) -> u32 {
    if whole.is_zero() {
        return 0;
    }
    round(part * Decimal::ONE_HUNDRED / whole, 0).to_u32().unwrap_or(0)
}

fn sum(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Days the average is spread over.
///
/// Fixed approximations for week, month and year; for `all` and `custom` the
/// span from the earliest record to now, rounded up, at least one.
fn day_count(expenses: &[Expense], period: Period, now: DateTime<Utc>) -> i64 {
    match period {
        Period::Week => 7,
        Period::Month => 30,
        Period::Year => 365,
        Period::All | Period::Custom => {
            let Some(earliest) = expenses.iter().map(|e| e.date).min() else {
                return 1;
            };
            let millis = (now - earliest).num_milliseconds();
            let days = millis / MILLIS_PER_DAY + i64::from(millis % MILLIS_PER_DAY > 0);
            days.max(1)
        }
    }
}

/// Total, count and per-day average of an already-selected set
pub fn summarize<Tz: TimeZone>(expenses: &[Expense], period: Period, now: &DateTime<Tz>) -> Summary {
    let days = day_count(expenses, period, now.with_timezone(&Utc));
    if expenses.is_empty() {
        return Summary {
            days,
            ..Summary::default()
        };
    }

    let total = sum(expenses);
    Summary {
        total,
        count: expenses.len(),
        average_per_day: round(total / Decimal::from(days), 2),
        days,
    }
}

/// Per-category sums with every category present
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for expense in expenses {
        totals.add(expense.category, expense.amount);
    }
    totals
}

/// Non-zero categories with amount, share and count, in registry order
pub fn category_breakdown(expenses: &[Expense]) -> CategoryBreakdown {
    let totals = category_totals(expenses);
    let total = totals.total();
    let shares = totals
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percent: percent_of(amount, total),
            count: expenses.iter().filter(|e| e.category == category).count(),
        })
        .collect();
    CategoryBreakdown { total, shares }
}

/// Zero-seeded trend buckets ending at `now`, ascending
pub fn daily_series<Tz: TimeZone>(
    expenses: &[Expense],
    unit: BucketUnit,
    now: &DateTime<Tz>,
) -> Vec<SeriesPoint> {
    match unit {
        BucketUnit::Day(n) => day_buckets(expenses, n, now),
        BucketUnit::Month(n) => month_buckets(expenses, n, now, "%b"),
    }
}

/// Last `months` calendar months, labelled like `Oct 26`
pub fn monthly_overview<Tz: TimeZone>(
    expenses: &[Expense],
    months: u32,
    now: &DateTime<Tz>,
) -> Vec<SeriesPoint> {
    month_buckets(expenses, months, now, "%b %y")
}

fn day_buckets<Tz: TimeZone>(expenses: &[Expense], n: u32, now: &DateTime<Tz>) -> Vec<SeriesPoint> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut points: Vec<SeriesPoint> = (0..i64::from(n))
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|day| SeriesPoint {
            label: day.format("%-d %b").to_string(),
            start: day,
            amount: Decimal::ZERO,
        })
        .collect();

    let index: BTreeMap<NaiveDate, usize> =
        points.iter().enumerate().map(|(i, p)| (p.start, i)).collect();
    for expense in expenses {
        if let Some(&i) = index.get(&expense.local_date(&tz)) {
            points[i].amount += expense.amount;
        }
    }
    points
}

fn month_buckets<Tz: TimeZone>(
    expenses: &[Expense],
    n: u32,
    now: &DateTime<Tz>,
    label_format: &str,
) -> Vec<SeriesPoint> {
    let tz = now.timezone();
    let current = YearMonth::of(now.date_naive());
    let months: Vec<(YearMonth, NaiveDate)> = (0..n)
        .rev()
        .map(|back| current.minus_months(back))
        .filter_map(|month| month.first_day().map(|day| (month, day)))
        .collect();

    let mut amounts: BTreeMap<YearMonth, Decimal> =
        months.iter().map(|(m, _)| (*m, Decimal::ZERO)).collect();
    for expense in expenses {
        if let Some(amount) = amounts.get_mut(&YearMonth::of(expense.local_date(&tz))) {
            *amount += expense.amount;
        }
    }

    months
        .into_iter()
        .map(|(month, start)| SeriesPoint {
            label: start.format(label_format).to_string(),
            start,
            amount: amounts.get(&month).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Per-day totals for the last `days` days with spending, and the latest change
pub fn daily_movement<Tz: TimeZone>(
    expenses: &[Expense],
    days: usize,
    now: &DateTime<Tz>,
) -> DailyMovement {
    let tz = now.timezone();
    let mut by_day: BTreeMap<NaiveDate, DayTotal> = BTreeMap::new();
    for expense in expenses {
        let date = expense.local_date(&tz);
        let day = by_day.entry(date).or_insert(DayTotal {
            date,
            amount: Decimal::ZERO,
            count: 0,
        });
        day.amount += expense.amount;
        day.count += 1;
    }

    let skip = by_day.len().saturating_sub(days);
    let days: Vec<DayTotal> = by_day.into_values().skip(skip).collect();

    let Some(last) = days.last() else {
        return DailyMovement::default();
    };
    let current = last.amount;
    let previous = days
        .len()
        .checked_sub(2)
        .and_then(|i| days.get(i))
        .map_or(current, |d| d.amount);
    let change_percent = if previous > Decimal::ZERO {
        round((current - previous) / previous * Decimal::ONE_HUNDRED, 1)
    } else {
        Decimal::ZERO
    };

    DailyMovement {
        current,
        change_percent,
        days,
    }
}

/// Narrative facts in a fixed order; empty input yields no insights
pub fn insights<Tz: TimeZone>(
    expenses: &[Expense],
    currency: &CurrencyConfig,
    now: &DateTime<Tz>,
) -> Vec<Insight> {
    let Some(first) = expenses.first() else {
        return Vec::new();
    };
    let money = |amount: Decimal, dp: u32| format_currency(amount, &currency.symbol, dp);
    let mut insights = Vec::with_capacity(4);

    let totals = category_totals(expenses);
    let total = totals.total();
    if let Some((category, amount)) = totals.top() {
        let percent = percent_of(amount, total);
        insights.push(Insight {
            kind: InsightKind::TopCategory,
            message: format!(
                "Your highest spending is on {} at {}% of total ({})",
                category.name(),
                percent,
                money(amount, currency.decimal_places)
            ),
            amount,
            category: Some(category),
            percent: Some(percent),
        });
    }

    let average = round(total / Decimal::from(expenses.len()), 2);
    insights.push(Insight {
        kind: InsightKind::AverageTransaction,
        message: format!("Your average transaction is {}", money(average, 0)),
        amount: average,
        category: None,
        percent: None,
    });

    let largest = expenses
        .iter()
        .fold(first, |max, e| if e.amount > max.amount { e } else { max });
    insights.push(Insight {
        kind: InsightKind::LargestExpense,
        message: format!(
            "Your biggest expense was {} on {}",
            money(largest.amount, currency.decimal_places),
            largest.description
        ),
        amount: largest.amount,
        category: Some(largest.category),
        percent: None,
    });

    let tz = now.timezone();
    let distinct_days: BTreeSet<NaiveDate> = expenses.iter().map(|e| e.local_date(&tz)).collect();
    let per_day = round(total / Decimal::from(distinct_days.len().max(1)), 2);
    insights.push(Insight {
        kind: InsightKind::DailyAverage,
        message: format!("You're spending about {} per day on average", money(per_day, 0)),
        amount: per_day,
        category: None,
        percent: None,
    });

    insights
}

/// Stable sort then 1-based offset pagination
pub fn sort_and_paginate(
    expenses: &[Expense],
    sort: SortOrder,
    page_size: usize,
    page: usize,
) -> Page<Expense> {
    let mut sorted = expenses.to_vec();
    match sort {
        SortOrder::Newest => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Highest => sorted.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortOrder::Lowest => sorted.sort_by(|a, b| a.amount.cmp(&b.amount)),
    }

    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_count = sorted.len();
    let total_pages = total_count.div_ceil(page_size);
    let items = sorted
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total_count,
        total_pages,
    }
}

/// Page links for a pagination bar: first, last, current ± 1, gaps at ± 2
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }
    (1..=total)
        .filter_map(|i| {
            if i == 1 || i == total || (i >= current.saturating_sub(1) && i <= current.saturating_add(1)) {
                Some(PageLink::Page {
                    number: i,
                    current: i == current,
                })
            } else if current.checked_sub(2) == Some(i) || current.checked_add(2) == Some(i) {
                Some(PageLink::Gap)
            } else {
                None
            }
        })
        .collect()
}

/// Home screen totals and the trend against yesterday
pub fn dashboard<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Dashboard {
    let tz = now.timezone();
    let today = now.date_naive();
    let yesterday = today.pred_opt();
    let this_month = YearMonth::of(today);
    let week_ago = now.with_timezone(&Utc) - Duration::days(7);

    let mut today_total = Decimal::ZERO;
    let mut yesterday_total = Decimal::ZERO;
    let mut week = Decimal::ZERO;
    let mut month = Decimal::ZERO;
    let mut today_by_category = CategoryTotals::default();

    for expense in expenses {
        let date = expense.local_date(&tz);
        if date == today {
            today_total += expense.amount;
            today_by_category.add(expense.category, expense.amount);
        }
        if Some(date) == yesterday {
            yesterday_total += expense.amount;
        }
        if expense.date >= week_ago {
            week += expense.amount;
        }
        if this_month.contains(date) {
            month += expense.amount;
        }
    }

    Dashboard {
        today: today_total,
        yesterday: yesterday_total,
        week,
        month,
        today_by_category,
        trend: trend(today_total, yesterday_total),
    }
}

fn trend(today: Decimal, yesterday: Decimal) -> Trend {
    if yesterday <= Decimal::ZERO {
        return Trend::NoData;
    }
    let diff = today - yesterday;
    let percent = percent_of(diff.abs(), yesterday);
    if diff > Decimal::ZERO {
        Trend::Up(percent)
    } else if diff < Decimal::ZERO {
        Trend::Down(percent)
    } else {
        Trend::Same
    }
}

/// Run every analytics computation for one query.
///
/// The history page honours the category filter only; the monthly overview
/// covers the whole collection.
pub fn analytics_report<Tz: TimeZone>(
    expenses: &[Expense],
    query: &AnalyticsQuery,
    now: &DateTime<Tz>,
    currency: &CurrencyConfig,
) -> AnalyticsReport {
    let selector = PeriodSelector::new(query.period)
        .with_category(query.category)
        .with_month(query.month);
    let selected = select_by_period(expenses, &selector, now);

    let history_filter = PeriodSelector::new(Period::All).with_category(query.category);
    let history_source = select_by_period(expenses, &history_filter, now);
    let history = sort_and_paginate(&history_source, query.sort, query.page_size, query.page);
    let pages = page_window(history.page, history.total_pages);

    AnalyticsReport {
        title: selector.description(now),
        summary: summarize(&selected, query.period, now),
        breakdown: category_breakdown(&selected),
        trend: daily_series(&selected, BucketUnit::for_period(query.period), now),
        movement: daily_movement(&selected, query.trend_days, now),
        monthly: monthly_overview(expenses, query.monthly_months, now),
        insights: insights(&selected, currency, now),
        history,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneyvibe_parser::Category;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).unwrap()
    }

    fn expense(id: &str, amount: &str, category: Category, date: DateTime<Utc>) -> Expense {
        Expense::new(id.to_string(), format!("Item {}", id), d(amount), category, date)
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("1", "100", Category::Transport, now()),
            expense("2", "200", Category::Food, now() - Duration::days(7)),
            expense("3", "50", Category::Snacks, now() - Duration::days(40)),
        ]
    }

    #[test]
    fn test_end_to_end_week_and_all() {
        let expenses = sample();

        let week = select_by_period(&expenses, &PeriodSelector::new(Period::Week), &now());
        let summary = summarize(&week, Period::Week, &now());
        // The record exactly seven days old sits inside the inclusive window
        assert_eq!(summary.total, d("300"));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_per_day, d("42.86"));

        let all = select_by_period(&expenses, &PeriodSelector::new(Period::All), &now());
        let summary = summarize(&all, Period::All, &now());
        assert_eq!(summary.total, d("350"));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.days, 40);
        assert_eq!(summary.average_per_day, d("8.75"));
    }

    #[test]
    fn test_summarize_empty_and_pure() {
        let empty = summarize(&[], Period::All, &now());
        assert_eq!(empty.total, Decimal::ZERO);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average_per_day, Decimal::ZERO);

        let expenses = sample();
        assert_eq!(
            summarize(&expenses, Period::Month, &now()),
            summarize(&expenses, Period::Month, &now())
        );
    }

    #[test]
    fn test_summarize_partial_day_rounds_up() {
        let expenses = vec![expense("1", "30", Category::Food, now() - Duration::hours(30))];
        let summary = summarize(&expenses, Period::Custom, &now());
        assert_eq!(summary.days, 2);
        assert_eq!(summary.average_per_day, d("15"));
    }

    #[test]
    fn test_category_totals_match_direct_sum() {
        let mut expenses = sample();
        expenses.push(expense("4", "12.34", Category::Other, now()));
        expenses.push(expense("5", "0.66", Category::Transport, now()));
        let totals = category_totals(&expenses);
        assert_eq!(totals.total(), sum(&expenses));
        assert_eq!(totals.get(Category::Transport), d("100.66"));
        assert_eq!(totals.get(Category::Shopping), Decimal::ZERO);
    }

    #[test]
    fn test_category_breakdown_skips_empty_categories() {
        let breakdown = category_breakdown(&sample());
        assert_eq!(breakdown.total, d("350"));
        let keys: Vec<Category> = breakdown.shares.iter().map(|s| s.category).collect();
        assert_eq!(keys, vec![Category::Transport, Category::Food, Category::Snacks]);
        assert_eq!(breakdown.shares[0].percent, 29);
        assert_eq!(breakdown.shares[1].percent, 57);
        assert_eq!(breakdown.shares[2].percent, 14);
        assert_eq!(breakdown.shares[1].count, 1);
    }

    #[test]
    fn test_daily_series_days() {
        let series = daily_series(&sample(), BucketUnit::Day(7), &now());
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].label, "13 Oct");
        assert_eq!(series[6].label, "19 Oct");
        assert_eq!(series[6].amount, d("100"));
        // Seven days ago is outside a seven-bucket chart
        assert_eq!(series.iter().map(|p| p.amount).sum::<Decimal>(), d("100"));
    }

    #[test]
    fn test_daily_series_months_keyed_by_year() {
        let expenses = vec![
            expense("a", "10", Category::Food, Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()),
            expense("b", "99", Category::Food, Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap()),
        ];
        let series = daily_series(&expenses, BucketUnit::Month(12), &now());
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].label, "Nov");
        assert_eq!(series[11].label, "Oct");
        let march = series.iter().find(|p| p.label == "Mar").unwrap();
        assert_eq!(march.amount, d("10"));
    }

    #[test]
    fn test_monthly_overview_labels() {
        let overview = monthly_overview(&sample(), 6, &now());
        let labels: Vec<&str> = overview.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["May 26", "Jun 26", "Jul 26", "Aug 26", "Sep 26", "Oct 26"]);
        assert_eq!(overview[4].amount, d("50"));
        assert_eq!(overview[5].amount, d("300"));
    }

    #[test]
    fn test_daily_movement() {
        let expenses = vec![
            expense("1", "80", Category::Food, now() - Duration::days(3)),
            expense("2", "20", Category::Food, now() - Duration::days(3)),
            expense("3", "150", Category::Food, now()),
        ];
        let movement = daily_movement(&expenses, 14, &now());
        assert_eq!(movement.days.len(), 2);
        assert_eq!(movement.days[0].count, 2);
        assert_eq!(movement.current, d("150"));
        assert_eq!(movement.change_percent, d("50.0"));

        let single = daily_movement(&expenses[2..], 14, &now());
        assert_eq!(single.change_percent, Decimal::ZERO);
        assert_eq!(daily_movement(&[], 14, &now()), DailyMovement::default());
    }

    #[test]
    fn test_insights_order_and_values() {
        let currency = CurrencyConfig::default();
        let insights = insights(&sample(), &currency, &now());
        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::TopCategory,
                InsightKind::AverageTransaction,
                InsightKind::LargestExpense,
                InsightKind::DailyAverage,
            ]
        );
        assert_eq!(insights[0].category, Some(Category::Food));
        assert_eq!(insights[0].percent, Some(57));
        assert_eq!(insights[0].message, "Your highest spending is on Food at 57% of total (₹200)");
        assert_eq!(insights[1].amount, d("116.67"));
        assert_eq!(insights[1].message, "Your average transaction is ₹117");
        assert_eq!(insights[2].message, "Your biggest expense was ₹200 on Item 2");
        assert_eq!(insights[3].amount, d("116.67"));

        assert!(super::insights(&[], &currency, &now()).is_empty());
    }

    #[test]
    fn test_pagination_reconstructs_sorted_input() {
        let expenses: Vec<Expense> = (0..23)
            .map(|i| expense(&i.to_string(), &(i % 5 + 1).to_string(), Category::Other, now() - Duration::hours(i)))
            .collect();
        let page_size = 5;
        let first = sort_and_paginate(&expenses, SortOrder::Highest, page_size, 1);
        assert_eq!(first.total_pages, 5);
        assert_eq!(first.total_count, 23);

        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages {
            rebuilt.extend(sort_and_paginate(&expenses, SortOrder::Highest, page_size, page).items);
        }
        let mut sorted = expenses.clone();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        assert_eq!(rebuilt, sorted);

        let past_end = sort_and_paginate(&expenses, SortOrder::Newest, page_size, 9);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let expenses = sample();
        let ids = |sort| -> Vec<String> {
            sort_and_paginate(&expenses, sort, 10, 1).items.into_iter().map(|e| e.id).collect()
        };
        assert_eq!(ids(SortOrder::Newest), vec!["1", "2", "3"]);
        assert_eq!(ids(SortOrder::Oldest), vec!["3", "2", "1"]);
        assert_eq!(ids(SortOrder::Highest), vec!["2", "1", "3"]);
        assert_eq!(ids(SortOrder::Lowest), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_page_window() {
        assert!(page_window(1, 1).is_empty());
        assert_eq!(
            page_window(5, 10),
            vec![
                PageLink::Page { number: 1, current: false },
                PageLink::Gap,
                PageLink::Page { number: 4, current: false },
                PageLink::Page { number: 5, current: true },
                PageLink::Page { number: 6, current: false },
                PageLink::Gap,
                PageLink::Page { number: 10, current: false },
            ]
        );
        assert_eq!(
            page_window(1, 3),
            vec![
                PageLink::Page { number: 1, current: true },
                PageLink::Page { number: 2, current: false },
                PageLink::Page { number: 3, current: false },
            ]
        );
    }

    #[test]
    fn test_page_window_far_past_the_end() {
        assert_eq!(
            page_window(usize::MAX, 3),
            vec![
                PageLink::Page { number: 1, current: false },
                PageLink::Page { number: 3, current: false },
            ]
        );
        assert_eq!(
            page_window(0, 4),
            vec![
                PageLink::Page { number: 1, current: false },
                PageLink::Gap,
                PageLink::Page { number: 4, current: false },
            ]
        );
    }

    #[test]
    fn test_dashboard_trend() {
        let yesterday = now() - Duration::days(1);
        let expenses = vec![
            expense("1", "150", Category::Food, now()),
            expense("2", "30", Category::Snacks, now()),
            expense("3", "120", Category::Food, yesterday),
            expense("4", "500", Category::Shopping, now() - Duration::days(10)),
        ];
        let board = dashboard(&expenses, &now());
        assert_eq!(board.today, d("180"));
        assert_eq!(board.yesterday, d("120"));
        assert_eq!(board.week, d("300"));
        assert_eq!(board.month, d("800"));
        assert_eq!(board.today_by_category.get(Category::Snacks), d("30"));
        assert_eq!(board.trend, Trend::Up(50));

        assert_eq!(trend(d("60"), d("120")), Trend::Down(50));
        assert_eq!(trend(d("120"), d("120")), Trend::Same);
        assert_eq!(trend(d("10"), Decimal::ZERO), Trend::NoData);
    }

    #[test]
    fn test_analytics_report_history_ignores_period() {
        let query = AnalyticsQuery {
            period: Period::Week,
            category: Some(Category::Snacks),
            ..AnalyticsQuery::default()
        };
        let report = analytics_report(&sample(), &query, &now(), &CurrencyConfig::default());
        assert_eq!(report.summary.count, 0);
        assert!(report.insights.is_empty());
        assert_eq!(report.history.total_count, 1);
        assert_eq!(report.history.items[0].id, "3");
        assert_eq!(report.trend.len(), 7);
        assert_eq!(report.monthly.iter().map(|p| p.amount).sum::<Decimal>(), d("350"));
        assert_eq!(report.title, "Last 7 Days · Snacks");
    }
}
