use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{MonthlyStats, Recommendation, Restaurant, Visit};
use crate::recommender::constants::{TARGET_DAILY_SPEND, WORK_DAYS_PER_MONTH};

/// Display the main recommendation card with its explanation.
pub fn display_recommendation(recommendation: &Recommendation, explanation: &str) {
    println!();
    println!("=== Today's Pick ===");
    println!();
    println!("  {} ({})", recommendation.name, recommendation.area);
    println!(
        "  {} - {} SAR, {} min away",
        recommendation.item, recommendation.price, recommendation.travel_time
    );
    println!(
        "  Scores: recency {:.2}, budget {:.2}, final {:.2}",
        recommendation.recency_score, recommendation.budget_score, recommendation.final_score
    );

    if !explanation.is_empty() {
        println!();
        println!("  Why this? {}", explanation);
    }
    println!();
}

/// Display alternative picks below the main recommendation.
pub fn display_alternatives(alternatives: &[Recommendation]) {
    if alternatives.is_empty() {
        return;
    }

    println!("--- Other Options ---");

    let max_name_len = alternatives.iter().map(|a| a.name.len()).max().unwrap_or(10);

    for (i, alt) in alternatives.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {} ({} SAR, {} min) | score {:.2}",
            i + 1,
            alt.name,
            alt.item,
            alt.price,
            alt.travel_time,
            alt.final_score,
            width = max_name_len
        );
    }
    println!();
}

/// Display the monthly stats header.
pub fn display_stats(stats: &MonthlyStats) {
    println!(
        "This month: {} visits, {} SAR spent, {} SAR/day average (target {}) - {}",
        stats.days_visited,
        stats.total_spent,
        stats.current_average,
        stats.target_daily,
        stats.status.label()
    );
}

/// Display the month overview: stats, a Sunday-first visit calendar, and the
/// remaining daily budget over an assumed 22-work-day month.
pub fn display_month(visits: &[&Visit], stats: &MonthlyStats, today: NaiveDate) {
    println!();
    println!("=== {} ===", today.format("%B %Y"));
    println!();
    display_stats(stats);

    let remaining_days = WORK_DAYS_PER_MONTH.saturating_sub(stats.days_visited);
    if remaining_days > 0 {
        let budget_left = WORK_DAYS_PER_MONTH as f64 * TARGET_DAILY_SPEND - stats.total_spent;
        println!(
            "Remaining budget: {:.0} SAR over {} work days ({:.0} SAR/day)",
            budget_left,
            remaining_days,
            budget_left / remaining_days as f64
        );
    }
    println!();

    // Total spent per calendar day this month.
    let mut spent_by_day: HashMap<u32, f64> = HashMap::new();
    for visit in visits {
        *spent_by_day.entry(visit.date.day()).or_insert(0.0) += visit.price;
    }

    println!("  Sun   Mon   Tue   Wed   Thu   Fri   Sat");

    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let days_in_month = days_in_month(today.year(), today.month());

    let mut cells: Vec<String> = Vec::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push("     ".to_string());
    }
    for day in 1..=days_in_month {
        match spent_by_day.get(&day) {
            Some(spent) => cells.push(format!("{:>2}*{:<2.0}", day, spent)),
            None => cells.push(format!("{:>2}   ", day)),
        }
    }

    for week in cells.chunks(7) {
        println!("  {}", week.join(" "));
    }

    println!();
    println!("  (* marks a visit, with SAR spent)");
    println!();
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(31)
}

/// Display the visit history, newest first.
pub fn display_history(visits: &[&Visit]) {
    if visits.is_empty() {
        println!("No visits recorded yet. Log your first visit with 'recommend' or 'log'.");
        return;
    }

    println!();
    println!("=== Visit History ({} visits) ===", visits.len());
    println!();

    let max_name_len = visits.iter().map(|v| v.restaurant.len()).max().unwrap_or(10);

    for visit in visits {
        println!(
            "  {} | {:<width$} | {:>5} SAR | {}",
            visit.date,
            visit.restaurant,
            visit.price,
            visit.item,
            width = max_name_len
        );
    }

    let total: f64 = visits.iter().map(|v| v.price).sum();
    let average = total / visits.len() as f64;

    println!();
    println!(
        "Total visits: {} | Total spent: {} SAR | Average: {:.1} SAR",
        visits.len(),
        total,
        average
    );
    println!();
}

/// Display the restaurant list.
pub fn display_restaurants(restaurants: &[&Restaurant]) {
    if restaurants.is_empty() {
        println!("No restaurants to show.");
        return;
    }

    println!();
    println!("=== Restaurants ({} entries) ===", restaurants.len());
    println!();

    let max_name_len = restaurants.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for restaurant in restaurants {
        let day = if restaurant.specific_day.is_empty() {
            "Any"
        } else {
            &restaurant.specific_day
        };

        println!(
            "  {:<width$} | {} | {} | {} SAR | {} min | {}",
            restaurant.name,
            restaurant.area,
            restaurant.item,
            restaurant.price,
            restaurant.travel_time,
            day,
            width = max_name_len
        );
    }
    println!();
}
