use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{History, Restaurant};

/// Load the restaurant list from a tab-separated file.
///
/// Numeric cells that fail to parse load as 0; a missing specific-day cell
/// loads as the empty string (open any work day).
pub fn load_restaurants<P: AsRef<Path>>(path: P) -> Result<Vec<Restaurant>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;

    let mut restaurants = Vec::new();
    for record in reader.deserialize() {
        restaurants.push(record?);
    }

    Ok(restaurants)
}

/// Save the restaurant list back to its tab-separated file.
pub fn save_restaurants<P: AsRef<Path>>(path: P, restaurants: &[Restaurant]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;

    for restaurant in restaurants {
        writer.serialize(restaurant)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load the visit history from a JSON file.
///
/// Tolerant by contract: a missing or malformed file yields an empty history
/// so the read paths always have something to work with.
pub fn load_history<P: AsRef<Path>>(path: P) -> History {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Save the visit history as pretty-printed JSON.
pub fn save_history<P: AsRef<Path>>(path: P, history: &History) -> Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)?;
    Ok(())
}
