mod recommendation;
mod restaurant;
mod stats;
mod visit;

pub use recommendation::Recommendation;
pub use restaurant::Restaurant;
pub use stats::{BudgetStatus, MonthlyStats};
pub use visit::{History, Visit};
