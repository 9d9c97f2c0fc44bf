use chrono::NaiveDate;

use crate::models::{History, Recommendation, Restaurant};
use crate::recommender::calendar::day_label;
use crate::recommender::constants::RECENT_WINDOW_DAYS;
use crate::recommender::history::{monthly_stats, recent_restaurant_names};
use crate::recommender::scoring::score_restaurant;

/// Restaurants eligible on `date`: empty on weekends, otherwise entries with
/// no day restriction or one matching the day label (case-insensitive).
pub fn available_restaurants(restaurants: &[Restaurant], date: NaiveDate) -> Vec<&Restaurant> {
    let Some(label) = day_label(date) else {
        return Vec::new();
    };

    restaurants.iter().filter(|r| r.is_open_on(label)).collect()
}

/// Top recommendation for the day, or `None` when it is a weekend or no
/// restaurant is available.
pub fn recommend(
    restaurants: &[Restaurant],
    history: &History,
    date: NaiveDate,
) -> Option<Recommendation> {
    recommend_top_n(restaurants, history, date, 1).into_iter().next()
}

/// Up to `limit` recommendations in descending final-score order.
///
/// Restaurants visited within the trailing 7 days are excluded first; if that
/// empties the candidate set, the full available set is rescored instead, so
/// a repeat of a recent pick is possible by design. Ties keep the input-file
/// order (stable sort), so the first-listed restaurant wins.
pub fn recommend_top_n(
    restaurants: &[Restaurant],
    history: &History,
    date: NaiveDate,
    limit: usize,
) -> Vec<Recommendation> {
    let available = available_restaurants(restaurants, date);
    if available.is_empty() {
        return Vec::new();
    }

    let recent = recent_restaurant_names(history, date, RECENT_WINDOW_DAYS);
    let mut candidates: Vec<&Restaurant> = available
        .iter()
        .copied()
        .filter(|r| !recent.contains(&r.name))
        .collect();

    if candidates.is_empty() {
        // Everything was visited recently; allow repeats.
        candidates = available;
    }

    let stats = monthly_stats(history, date);

    let mut scored: Vec<(&Restaurant, crate::recommender::scoring::Scores)> = candidates
        .into_iter()
        .map(|r| {
            let scores = score_restaurant(r, history, date, &stats);
            (r, scores)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.final_score
            .partial_cmp(&a.1.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
        .iter()
        .take(limit)
        .map(|(r, scores)| Recommendation::new(r, scores))
        .collect()
}
