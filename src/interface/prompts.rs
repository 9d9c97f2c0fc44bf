use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::Restaurant;

/// Resolve a typed restaurant name against the known list.
///
/// Exact case-insensitive match first, then fuzzy matching with a
/// disambiguation menu. Returns `None` if nothing matches or the user
/// rejects every suggestion; callers may still log the name as typed.
pub fn resolve_restaurant_name(input: &str, restaurants: &[Restaurant]) -> Result<Option<String>> {
    let exact = restaurants
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(input));

    if let Some(restaurant) = exact {
        return Ok(Some(restaurant.name.clone()));
    }

    let mut candidates: Vec<(&Restaurant, f64)> = restaurants
        .iter()
        .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let restaurant = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", restaurant.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| restaurant.name.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Prompt for the price paid and item eaten, seeded from the recommendation.
pub fn prompt_visit_details(default_price: u32, default_item: &str) -> Result<(f64, String)> {
    let price_input: String = Input::new()
        .with_prompt("Price paid (SAR)")
        .default(default_price.to_string())
        .interact_text()?;

    let price: f64 = price_input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid price".to_string()))?;

    if price < 0.0 {
        return Err(MenuError::InvalidInput(
            "Price must be non-negative".to_string(),
        ));
    }

    let item: String = Input::new()
        .with_prompt("What did you eat?")
        .default(default_item.to_string())
        .interact_text()?;

    Ok((price, item))
}

/// Interactive form for a new restaurant row.
pub fn prompt_new_restaurant() -> Result<Restaurant> {
    let name: String = Input::new().with_prompt("Restaurant name").interact_text()?;
    let area: String = Input::new().with_prompt("Area").interact_text()?;
    let item: String = Input::new()
        .with_prompt("Recommended item")
        .interact_text()?;

    if name.trim().is_empty() || area.trim().is_empty() || item.trim().is_empty() {
        return Err(MenuError::InvalidInput(
            "Name, area and item are required".to_string(),
        ));
    }

    let price: String = Input::new()
        .with_prompt("Estimated price (SAR)")
        .default("20".to_string())
        .interact_text()?;
    let price: u32 = price
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid price".to_string()))?;

    let travel_time: String = Input::new()
        .with_prompt("Travel time (minutes)")
        .default("20".to_string())
        .interact_text()?;
    let travel_time: u32 = travel_time
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid travel time".to_string()))?;

    let days = [
        "Any day",
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
    ];
    let selection = Select::new()
        .with_prompt("Specific day")
        .items(&days)
        .default(0)
        .interact()?;

    let specific_day = if selection == 0 {
        String::new()
    } else {
        days[selection].to_string()
    };

    Ok(Restaurant {
        name: name.trim().to_string(),
        area: area.trim().to_string(),
        specific_day,
        item: item.trim().to_string(),
        travel_time,
        price,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
