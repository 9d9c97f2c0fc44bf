use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{MenuError, Result};
use crate::models::{History, Restaurant, Visit};
use crate::state::persistence;

/// Owns the loaded restaurant list and visit history plus their file paths.
///
/// Mutations persist immediately. Single-user, single-process: there is no
/// locking against concurrent modification of the backing files.
pub struct MenuState {
    restaurants: Vec<Restaurant>,
    history: History,
    restaurants_path: PathBuf,
    history_path: PathBuf,
}

impl MenuState {
    /// Load both files. The restaurant file must parse; a missing or
    /// malformed history loads as empty.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        restaurants_path: P,
        history_path: Q,
    ) -> Result<Self> {
        let restaurants = persistence::load_restaurants(&restaurants_path)?;
        let history = persistence::load_history(&history_path);

        Ok(Self {
            restaurants,
            history,
            restaurants_path: restaurants_path.as_ref().to_path_buf(),
            history_path: history_path.as_ref().to_path_buf(),
        })
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Look up a restaurant by name (case-insensitive).
    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Append one visit and persist the history file.
    ///
    /// The restaurant name is recorded as given; it is not required to exist
    /// in the restaurant list.
    pub fn add_visit(
        &mut self,
        restaurant: &str,
        price: f64,
        item: &str,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        let visit = Visit {
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            restaurant: restaurant.to_string(),
            price,
            item: item.to_string(),
        };

        self.history.visits.push(visit);
        persistence::save_history(&self.history_path, &self.history)
    }

    /// Remove every visit with an exact (date, restaurant) match, persist,
    /// and return how many were removed.
    pub fn delete_visit(&mut self, date: NaiveDate, restaurant: &str) -> Result<usize> {
        let before = self.history.visits.len();
        self.history
            .visits
            .retain(|v| !(v.date == date && v.restaurant == restaurant));
        let removed = before - self.history.visits.len();

        persistence::save_history(&self.history_path, &self.history)?;
        Ok(removed)
    }

    /// Append a restaurant and persist the TSV. Names are unique
    /// (case-insensitive); duplicates are rejected.
    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> Result<()> {
        if self.restaurant(&restaurant.name).is_some() {
            return Err(MenuError::DuplicateRestaurant(restaurant.name));
        }

        self.restaurants.push(restaurant);
        persistence::save_restaurants(&self.restaurants_path, &self.restaurants)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_state() -> (MenuState, NamedTempFile, NamedTempFile) {
        let mut restaurants = NamedTempFile::new().unwrap();
        restaurants
            .write_all(
                b"Restaurant name\tArea\tSpecific day\tItem name\tTime to leave office\testimate-Price\n\
                  Al Baik\tOlaya\t\tBroast meal\t15\t21\n",
            )
            .unwrap();
        let history = NamedTempFile::new().unwrap();

        let state = MenuState::load(restaurants.path(), history.path()).unwrap();
        (state, restaurants, history)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let (state, _r, _h) = sample_state();
        assert!(state.restaurant("al baik").is_some());
        assert!(state.restaurant("AL BAIK").is_some());
        assert!(state.restaurant("nowhere").is_none());
    }

    #[test]
    fn test_add_visit_persists() {
        let (mut state, _r, history_file) = sample_state();
        state
            .add_visit("Al Baik", 21.0, "Broast meal", Some(date(2026, 8, 23)))
            .unwrap();

        assert_eq!(state.history().len(), 1);

        let reloaded = persistence::load_history(history_file.path());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.visits[0].restaurant, "Al Baik");
    }

    #[test]
    fn test_delete_visit_exact_match_only() {
        let (mut state, _r, _h) = sample_state();
        state
            .add_visit("Al Baik", 21.0, "Broast meal", Some(date(2026, 8, 23)))
            .unwrap();
        state
            .add_visit("Al Baik", 18.0, "Sandwich", Some(date(2026, 8, 24)))
            .unwrap();

        let removed = state.delete_visit(date(2026, 8, 23), "Al Baik").unwrap();
        assert_eq!(removed, 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().visits[0].date, date(2026, 8, 24));
    }

    #[test]
    fn test_add_restaurant_rejects_duplicate() {
        let (mut state, _r, _h) = sample_state();
        let duplicate = Restaurant {
            name: "al baik".to_string(),
            area: "Malaz".to_string(),
            specific_day: String::new(),
            item: "Nuggets".to_string(),
            travel_time: 10,
            price: 15,
        };

        let result = state.add_restaurant(duplicate);
        assert!(matches!(result, Err(MenuError::DuplicateRestaurant(_))));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_add_restaurant_persists() {
        let (mut state, restaurants_file, _h) = sample_state();
        let new = Restaurant {
            name: "Mandi Corner".to_string(),
            area: "Malaz".to_string(),
            specific_day: "Thursday".to_string(),
            item: "Lamb mandi".to_string(),
            travel_time: 25,
            price: 32,
        };

        state.add_restaurant(new).unwrap();
        assert_eq!(state.len(), 2);

        let reloaded = persistence::load_restaurants(restaurants_file.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[1].name, "Mandi Corner");
    }
}
