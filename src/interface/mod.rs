pub mod prompts;
pub mod render;

pub use prompts::{prompt_new_restaurant, prompt_visit_details, prompt_yes_no, resolve_restaurant_name};
pub use render::{
    display_alternatives, display_history, display_month, display_recommendation,
    display_restaurants, display_stats,
};
