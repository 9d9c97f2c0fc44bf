/// Daily spend target used for the monthly budget display (SAR).
pub const TARGET_DAILY_SPEND: f64 = 22.5;

/// Monthly average below this is green (under budget).
pub const GREEN_BELOW_AVERAGE: f64 = 20.0;

/// Monthly average above this is red (over budget); between the two is yellow.
pub const RED_ABOVE_AVERAGE: f64 = 25.0;

/// Price normalizer for the budget score. Assumes typical lunch prices stay
/// well under 40 SAR; scores are not clamped if a price exceeds it.
pub const PRICE_NORMALIZER: f64 = 40.0;

/// Days after which the recency score saturates at 1.0.
pub const RECENCY_SATURATION_DAYS: i64 = 30;

/// Trailing window for excluding recently visited restaurants.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Sentinel days-since-visit for restaurants never visited.
pub const NEVER_VISITED: i64 = 999;

/// Blend weights for the final score on normal days.
pub const RECENCY_WEIGHT: f64 = 0.5;
pub const BUDGET_WEIGHT: f64 = 0.5;

/// Budget score used when budget pressure is neutral or irrelevant.
pub const NEUTRAL_BUDGET_SCORE: f64 = 0.5;

/// Assumed work days per month for the remaining-budget display.
pub const WORK_DAYS_PER_MONTH: usize = 22;
