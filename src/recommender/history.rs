use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{BudgetStatus, History, MonthlyStats, Visit};
use crate::recommender::constants::NEVER_VISITED;

/// Visits falling in the given year-month, input order preserved.
pub fn month_visits(history: &History, year: i32, month: u32) -> Vec<&Visit> {
    history
        .visits
        .iter()
        .filter(|v| v.date.year() == year && v.date.month() == month)
        .collect()
}

/// Monthly spending statistics for the month containing `today`.
///
/// The average is rounded to 1 decimal before status classification; the
/// scorer consumes the rounded value as well.
pub fn monthly_stats(history: &History, today: NaiveDate) -> MonthlyStats {
    let visits = month_visits(history, today.year(), today.month());

    if visits.is_empty() {
        return MonthlyStats::default();
    }

    let days_visited = visits.len();
    let total_spent: f64 = visits.iter().map(|v| v.price).sum();
    let current_average = (total_spent / days_visited as f64 * 10.0).round() / 10.0;

    MonthlyStats {
        days_visited,
        total_spent,
        current_average,
        status: BudgetStatus::from_average(current_average),
        ..MonthlyStats::default()
    }
}

/// Visits within the trailing `window_days` window (inclusive cutoff).
pub fn recent_visits(history: &History, today: NaiveDate, window_days: i64) -> Vec<&Visit> {
    let cutoff = today - Duration::days(window_days);
    history.visits.iter().filter(|v| v.date >= cutoff).collect()
}

/// Names of restaurants visited within the trailing window.
pub fn recent_restaurant_names(
    history: &History,
    today: NaiveDate,
    window_days: i64,
) -> HashSet<String> {
    recent_visits(history, today, window_days)
        .into_iter()
        .map(|v| v.restaurant.clone())
        .collect()
}

/// Days since the most recent visit to `name`, or the 999 sentinel if the
/// restaurant was never visited.
pub fn days_since_visit(name: &str, history: &History, today: NaiveDate) -> i64 {
    history
        .visits
        .iter()
        .filter(|v| v.restaurant == name)
        .map(|v| v.date)
        .max()
        .map(|last| (today - last).num_days())
        .unwrap_or(NEVER_VISITED)
}
