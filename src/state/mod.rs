mod manager;
mod persistence;

pub use manager::MenuState;
pub use persistence::{load_history, load_restaurants, save_history, save_restaurants};
