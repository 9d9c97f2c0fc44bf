use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded lunch visit.
///
/// Visits are append-only; the only mutation is deletion by exact
/// (date, restaurant) match. The restaurant name is not checked against the
/// restaurant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub date: NaiveDate,
    pub restaurant: String,
    pub price: f64,
    pub item: String,
}

/// The visit log, in insertion order. No dedup: several visits on the same
/// day or to the same restaurant are all kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl History {
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { visits }
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_json_roundtrip() {
        let history = History::new(vec![Visit {
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            restaurant: "Al Baik".to_string(),
            price: 21.0,
            item: "Broast meal".to_string(),
        }]);

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("2026-08-23"));

        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back.visits, history.visits);
    }

    #[test]
    fn test_history_missing_visits_field() {
        let back: History = serde_json::from_str("{}").unwrap();
        assert!(back.is_empty());
    }
}
