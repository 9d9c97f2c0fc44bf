use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use daily_menu_rs::models::{History, Restaurant, Visit};
use daily_menu_rs::recommender::{explain, monthly_stats, recommend, recommend_top_n};
use daily_menu_rs::state::MenuState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_restaurant(name: &str, specific_day: &str, price: u32) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        area: "Malaz".to_string(),
        specific_day: specific_day.to_string(),
        item: "Lunch special".to_string(),
        travel_time: 15,
        price,
    }
}

fn make_visit(d: NaiveDate, restaurant: &str, price: f64) -> Visit {
    Visit {
        date: d,
        restaurant: restaurant.to_string(),
        price,
        item: "Lunch".to_string(),
    }
}

#[test]
fn test_no_recommendation_on_weekend() {
    let restaurants = vec![make_restaurant("A", "", 20)];
    let history = History::default();

    // 2026-08-28 Friday, 2026-08-29 Saturday.
    assert!(recommend(&restaurants, &history, date(2026, 8, 28)).is_none());
    assert!(recommend(&restaurants, &history, date(2026, 8, 29)).is_none());
    assert!(recommend_top_n(&restaurants, &history, date(2026, 8, 28), 5).is_empty());
}

#[test]
fn test_single_restaurant_empty_history() {
    let restaurants = vec![make_restaurant("Only Place", "", 20)];
    let history = History::default();

    let pick = recommend(&restaurants, &history, date(2026, 8, 24)).unwrap();
    assert_eq!(pick.name, "Only Place");
    assert_eq!(pick.days_since_visit, 999);
    assert_eq!(pick.recency_score, 1.0);
}

#[test]
fn test_special_day_prefers_longer_unvisited() {
    // Thursday 2026-08-27: budget irrelevant, recency decides.
    let today = date(2026, 8, 27);
    let restaurants = vec![
        make_restaurant("Cheap but fresh", "", 10),
        make_restaurant("Pricey and stale", "", 38),
    ];
    // Visited 2 and 10 days ago; the 2-day visit falls inside the 7-day
    // exclusion window, the 10-day one survives it.
    let history = History::new(vec![
        make_visit(date(2026, 8, 25), "Cheap but fresh", 10.0),
        make_visit(date(2026, 8, 17), "Pricey and stale", 38.0),
    ]);

    let pick = recommend(&restaurants, &history, today).unwrap();
    assert_eq!(pick.name, "Pricey and stale");
    assert_eq!(pick.final_score, pick.recency_score);
}

#[test]
fn test_over_budget_recommends_cheaper_option() {
    // Monthly average 30 SAR, equal (never-visited) recency.
    let today = date(2026, 8, 25);
    let restaurants = vec![make_restaurant("B", "", 35), make_restaurant("A", "", 15)];
    let history = History::new(vec![
        make_visit(date(2026, 8, 3), "Filler", 28.0),
        make_visit(date(2026, 8, 4), "Filler Two", 32.0),
    ]);

    let pick = recommend(&restaurants, &history, today).unwrap();
    assert_eq!(pick.name, "A");
}

#[test]
fn test_day_restricted_restaurant_only_on_its_day() {
    let restaurants = vec![
        make_restaurant("Everyday", "", 20),
        make_restaurant("Thursday Mandi", "Thursday", 30),
    ];
    let history = History::default();

    let tuesday = recommend_top_n(&restaurants, &history, date(2026, 8, 25), 5);
    assert!(tuesday.iter().all(|r| r.name != "Thursday Mandi"));

    let thursday = recommend_top_n(&restaurants, &history, date(2026, 8, 27), 5);
    assert!(thursday.iter().any(|r| r.name == "Thursday Mandi"));
}

#[test]
fn test_fallback_repeat_explanation_can_be_empty() {
    // Single restaurant visited 3 days ago, under-budget average, cheap item:
    // the pipeline falls back to a repeat and every clause is suppressed.
    let today = date(2026, 8, 25);
    let restaurants = vec![make_restaurant("Only", "", 18)];
    let history = History::new(vec![make_visit(date(2026, 8, 22), "Only", 15.0)]);

    let pick = recommend(&restaurants, &history, today).unwrap();
    assert_eq!(pick.name, "Only");

    let explanation = explain(&pick, &history, today);
    assert!(explanation.is_empty());
}

#[test]
fn test_add_then_delete_restores_history() {
    let mut restaurants_file = NamedTempFile::new().unwrap();
    restaurants_file
        .write_all(
            b"Restaurant name\tArea\tSpecific day\tItem name\tTime to leave office\testimate-Price\n\
              Al Baik\tOlaya\t\tBroast meal\t15\t21\n",
        )
        .unwrap();
    let history_file = NamedTempFile::new().unwrap();

    let mut state = MenuState::load(restaurants_file.path(), history_file.path()).unwrap();
    state
        .add_visit("Kept", 20.0, "Lunch", Some(date(2026, 8, 20)))
        .unwrap();

    let before = state.history().visits.clone();

    state
        .add_visit("Al Baik", 21.0, "Broast meal", Some(date(2026, 8, 24)))
        .unwrap();
    let removed = state.delete_visit(date(2026, 8, 24), "Al Baik").unwrap();

    assert_eq!(removed, 1);
    assert_eq!(state.history().visits, before);

    // And the same multiset survives a reload from disk.
    let reloaded = MenuState::load(restaurants_file.path(), history_file.path()).unwrap();
    assert_eq!(reloaded.history().visits, before);
}

#[test]
fn test_monthly_stats_consistent_with_recommendation_inputs() {
    let today = date(2026, 8, 25);
    let history = History::new(vec![
        make_visit(date(2026, 8, 3), "A", 18.0),
        make_visit(date(2026, 8, 4), "B", 19.0),
        make_visit(date(2026, 7, 30), "C", 50.0), // previous month, ignored
    ]);

    let stats = monthly_stats(&history, today);
    assert_eq!(stats.days_visited, 2);
    assert_eq!(stats.total_spent, 37.0);
    assert_eq!(stats.current_average, 18.5);
}
