use serde::{Deserialize, Deserializer, Serialize};

/// A restaurant row from the TSV list.
///
/// `specific_day` is empty for restaurants open on any work day. Numeric
/// fields are parsed leniently: an unparseable cell loads as 0 rather than
/// failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "Restaurant name")]
    pub name: String,

    #[serde(rename = "Area")]
    pub area: String,

    #[serde(rename = "Specific day", default)]
    pub specific_day: String,

    #[serde(rename = "Item name")]
    pub item: String,

    #[serde(rename = "Time to leave office", deserialize_with = "lenient_u32")]
    pub travel_time: u32,

    #[serde(rename = "estimate-Price", deserialize_with = "lenient_u32")]
    pub price: u32,
}

/// Parse a numeric cell, falling back to 0 for blanks or junk.
fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

impl Restaurant {
    /// Whether this restaurant is open on the given work-day label.
    pub fn is_open_on(&self, day_label: &str) -> bool {
        self.specific_day.is_empty() || self.specific_day.eq_ignore_ascii_case(day_label)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Restaurant {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Restaurant {}

impl std::hash::Hash for Restaurant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
