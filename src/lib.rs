pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod recommender;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{History, MonthlyStats, Recommendation, Restaurant, Visit};
