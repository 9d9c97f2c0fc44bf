use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use daily_menu_rs::cli::{Cli, Command};
use daily_menu_rs::error::Result;
use daily_menu_rs::interface::{
    display_alternatives, display_history, display_month, display_recommendation,
    display_restaurants, display_stats, prompt_new_restaurant, prompt_visit_details,
    prompt_yes_no, resolve_restaurant_name,
};
use daily_menu_rs::models::Visit;
use daily_menu_rs::recommender::{
    day_label, explain, is_special_day, is_work_day, month_visits, monthly_stats, recommend,
    recommend_top_n,
};
use daily_menu_rs::state::MenuState;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    if !Path::new(&cli.restaurants).exists() {
        eprintln!("Restaurant file not found: {}", cli.restaurants);
        eprintln!("Please ensure the tab-separated restaurant list exists before running.");
        return Ok(());
    }

    let mut state = MenuState::load(&cli.restaurants, &cli.history)?;

    match command {
        Command::Recommend { limit, no_log } => cmd_recommend(&mut state, today, limit, no_log),
        Command::Month => cmd_month(&state, today),
        Command::History { search } => cmd_history(&state, search.as_deref()),
        Command::Log {
            restaurant,
            price,
            item,
            date,
        } => cmd_log(&mut state, &restaurant, price, &item, date.unwrap_or(today)),
        Command::Delete { date, restaurant } => cmd_delete(&mut state, date, &restaurant),
        Command::Restaurants { day } => cmd_restaurants(&state, today, day.as_deref()),
        Command::AddRestaurant => cmd_add_restaurant(&mut state),
    }
}

/// Show today's pick, alternatives, and optionally log the accepted visit.
fn cmd_recommend(state: &mut MenuState, today: NaiveDate, limit: usize, no_log: bool) -> Result<()> {
    if !is_work_day(today) {
        println!("It's the weekend! Enjoy your time off. Come back on Sunday.");
        return Ok(());
    }

    if let Some(label) = day_label(today) {
        println!("Today: {}, {}", label, today.format("%B %d"));
    }
    if is_special_day(today) {
        println!("It's Thursday! No budget limit today.");
    }

    let stats = monthly_stats(state.history(), today);
    display_stats(&stats);

    let recommendation = match recommend(state.restaurants(), state.history(), today) {
        Some(r) => r,
        None => {
            println!("No restaurants available for today. Add some restaurants first!");
            return Ok(());
        }
    };

    let explanation = explain(&recommendation, state.history(), today);
    display_recommendation(&recommendation, &explanation);

    // List alternatives below the pick itself.
    let alternatives: Vec<_> = recommend_top_n(state.restaurants(), state.history(), today, limit + 1)
        .into_iter()
        .filter(|r| r.name != recommendation.name)
        .take(limit)
        .collect();
    display_alternatives(&alternatives);

    if no_log {
        return Ok(());
    }

    if prompt_yes_no("Accept and log this visit?", true)? {
        let (price, item) = prompt_visit_details(recommendation.price, &recommendation.item)?;
        state.add_visit(&recommendation.name, price, &item, Some(today))?;
        println!("Visit logged!");
    }

    Ok(())
}

/// Show monthly stats and the visit calendar.
fn cmd_month(state: &MenuState, today: NaiveDate) -> Result<()> {
    let stats = monthly_stats(state.history(), today);
    let visits = month_visits(state.history(), today.year(), today.month());
    display_month(&visits, &stats, today);
    Ok(())
}

/// Show the full visit history, newest first, optionally filtered.
fn cmd_history(state: &MenuState, search: Option<&str>) -> Result<()> {
    let mut visits: Vec<&Visit> = state
        .history()
        .visits
        .iter()
        .filter(|v| match search {
            Some(needle) => v
                .restaurant
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        })
        .collect();

    visits.sort_by(|a, b| b.date.cmp(&a.date));
    display_history(&visits);
    Ok(())
}

/// Log a visit by name, with fuzzy resolution against the restaurant list.
fn cmd_log(
    state: &mut MenuState,
    restaurant: &str,
    price: f64,
    item: &str,
    date: NaiveDate,
) -> Result<()> {
    let name = match resolve_restaurant_name(restaurant, state.restaurants())? {
        Some(name) => name,
        None => {
            // Visits carry no referential integrity, so log the name as typed.
            println!("'{}' is not in the restaurant list; logging as typed.", restaurant);
            restaurant.to_string()
        }
    };

    state.add_visit(&name, price, item, Some(date))?;
    println!("Logged {} at {} for {} SAR.", item, name, price);
    Ok(())
}

/// Delete visits matching a date and restaurant name exactly.
fn cmd_delete(state: &mut MenuState, date: NaiveDate, restaurant: &str) -> Result<()> {
    let removed = state.delete_visit(date, restaurant)?;

    if removed == 0 {
        println!("No visit found for {} on {}.", restaurant, date);
    } else {
        println!("Deleted {} visit(s).", removed);
    }
    Ok(())
}

/// List restaurants, optionally filtered by day availability.
fn cmd_restaurants(state: &MenuState, today: NaiveDate, day: Option<&str>) -> Result<()> {
    let filter_label = match day {
        Some("today") => match day_label(today) {
            Some(label) => Some(label.to_string()),
            None => {
                println!("It's the weekend; no restaurants are available today.");
                return Ok(());
            }
        },
        Some(named) => Some(named.to_string()),
        None => None,
    };

    let restaurants: Vec<_> = state
        .restaurants()
        .iter()
        .filter(|r| match &filter_label {
            Some(label) => r.is_open_on(label),
            None => true,
        })
        .collect();

    display_restaurants(&restaurants);
    Ok(())
}

/// Add a restaurant interactively.
fn cmd_add_restaurant(state: &mut MenuState) -> Result<()> {
    let restaurant = prompt_new_restaurant()?;
    let name = restaurant.name.clone();
    state.add_restaurant(restaurant)?;
    println!("Added {}!", name);
    Ok(())
}
