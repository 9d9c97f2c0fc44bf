use serde::{Deserialize, Serialize};

use crate::recommender::constants::{GREEN_BELOW_AVERAGE, RED_ABOVE_AVERAGE, TARGET_DAILY_SPEND};

/// Traffic-light classification of the current monthly average spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Green,
    Yellow,
    Red,
}

impl BudgetStatus {
    /// Classify a monthly average: < 20 green, 20–25 yellow, > 25 red.
    pub fn from_average(average: f64) -> Self {
        if average < GREEN_BELOW_AVERAGE {
            BudgetStatus::Green
        } else if average <= RED_ABOVE_AVERAGE {
            BudgetStatus::Yellow
        } else {
            BudgetStatus::Red
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::Green => "On Track",
            BudgetStatus::Yellow => "Warning",
            BudgetStatus::Red => "Over Budget",
        }
    }
}

/// Aggregate spending figures for one month, recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub days_visited: usize,
    pub total_spent: f64,
    /// Average spend per visit, rounded to 1 decimal.
    pub current_average: f64,
    pub status: BudgetStatus,
    pub target_daily: f64,
}

impl Default for MonthlyStats {
    fn default() -> Self {
        Self {
            days_visited: 0,
            total_spent: 0.0,
            current_average: 0.0,
            status: BudgetStatus::Green,
            target_daily: TARGET_DAILY_SPEND,
        }
    }
}
