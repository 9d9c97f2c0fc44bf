pub mod calendar;
pub mod constants;
pub mod explain;
pub mod history;
pub mod scoring;
pub mod selection;

pub use calendar::{day_label, is_special_day, is_work_day};
pub use explain::explain;
pub use history::{days_since_visit, month_visits, monthly_stats, recent_restaurant_names};
pub use scoring::{score_restaurant, Scores};
pub use selection::{available_restaurants, recommend, recommend_top_n};
