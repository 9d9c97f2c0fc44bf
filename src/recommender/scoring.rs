use chrono::NaiveDate;

use crate::models::{History, MonthlyStats, Restaurant};
use crate::recommender::calendar::is_special_day;
use crate::recommender::constants::*;
use crate::recommender::history::days_since_visit;

/// Score breakdown for one restaurant.
#[derive(Debug, Clone)]
pub struct Scores {
    pub days_since_visit: i64,
    pub recency_score: f64,
    pub budget_score: f64,
    pub final_score: f64,
}

/// Recency score: 0.0 for a visit today, ramping linearly to 1.0 at 30 days
/// (and staying there, including the never-visited sentinel).
pub fn recency_score(days_since_visit: i64) -> f64 {
    days_since_visit.min(RECENCY_SATURATION_DAYS) as f64 / RECENCY_SATURATION_DAYS as f64
}

/// Budget score from the current monthly average.
///
/// Over budget favors cheap options, under budget favors pricier ones, the
/// 20–25 band is neutral. Not clamped: a price above the 40 SAR normalizer
/// can push the over-budget score negative.
pub fn budget_score(price: f64, current_average: f64, special_day: bool) -> f64 {
    if special_day {
        return NEUTRAL_BUDGET_SCORE;
    }

    if current_average > RED_ABOVE_AVERAGE {
        1.0 - price / PRICE_NORMALIZER
    } else if current_average < GREEN_BELOW_AVERAGE {
        price / PRICE_NORMALIZER
    } else {
        NEUTRAL_BUDGET_SCORE
    }
}

/// Compute the full score breakdown for one restaurant.
///
/// On Thursdays the budget score is still computed (and reported) but the
/// final score is the recency score alone.
pub fn score_restaurant(
    restaurant: &Restaurant,
    history: &History,
    date: NaiveDate,
    stats: &MonthlyStats,
) -> Scores {
    let special = is_special_day(date);
    let days = days_since_visit(&restaurant.name, history, date);
    let recency = recency_score(days);
    let budget = budget_score(f64::from(restaurant.price), stats.current_average, special);

    let final_score = if special {
        recency
    } else {
        RECENCY_WEIGHT * recency + BUDGET_WEIGHT * budget
    };

    Scores {
        days_since_visit: days,
        recency_score: recency,
        budget_score: budget,
        final_score,
    }
}
