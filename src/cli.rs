use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Daily Menu — a lunch recommendation CLI balancing visit recency and budget.
#[derive(Parser, Debug)]
#[command(name = "daily_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the restaurant TSV file.
    #[arg(short, long, default_value = "data.tsv")]
    pub restaurants: String,

    /// Path to the visit history JSON file.
    #[arg(long, default_value = "visit_history.json")]
    pub history: String,

    /// Override today's date (YYYY-MM-DD), applied to all commands.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's pick with alternatives and optionally log the visit.
    Recommend {
        /// Number of alternative recommendations to list.
        #[arg(short, long, default_value_t = 5)]
        limit: usize,

        /// Skip the interactive accept-and-log prompt.
        #[arg(long)]
        no_log: bool,
    },

    /// Show this month's stats and visit calendar.
    Month,

    /// Show the full visit history, newest first.
    History {
        /// Only show visits to restaurants matching this substring.
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Log a visit manually.
    Log {
        /// Restaurant name (fuzzy-matched against the restaurant list).
        restaurant: String,

        /// Price paid (SAR).
        price: f64,

        /// What was eaten.
        item: String,

        /// Visit date (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete all visits matching a date and restaurant name.
    Delete {
        /// Visit date (YYYY-MM-DD).
        date: NaiveDate,

        /// Exact restaurant name.
        restaurant: String,
    },

    /// List restaurants, optionally filtered by day availability.
    Restaurants {
        /// Day name to filter by, or "today".
        #[arg(long)]
        day: Option<String>,
    },

    /// Add a new restaurant interactively.
    AddRestaurant,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            limit: 5,
            no_log: false,
        }
    }
}
