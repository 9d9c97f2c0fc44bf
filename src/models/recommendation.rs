use crate::models::Restaurant;
use crate::recommender::scoring::Scores;

/// A scored restaurant pick.
///
/// Carries the restaurant fields the presentation layer shows plus the score
/// breakdown, with scores rounded to 2 decimals.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub name: String,
    pub area: String,
    pub item: String,
    pub price: u32,
    pub travel_time: u32,
    pub days_since_visit: i64,
    pub recency_score: f64,
    pub budget_score: f64,
    pub final_score: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Recommendation {
    pub fn new(restaurant: &Restaurant, scores: &Scores) -> Self {
        Self {
            name: restaurant.name.clone(),
            area: restaurant.area.clone(),
            item: restaurant.item.clone(),
            price: restaurant.price,
            travel_time: restaurant.travel_time,
            days_since_visit: scores.days_since_visit,
            recency_score: round2(scores.recency_score),
            budget_score: round2(scores.budget_score),
            final_score: round2(scores.final_score),
        }
    }
}
