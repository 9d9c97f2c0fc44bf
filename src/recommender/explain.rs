use chrono::NaiveDate;

use crate::models::{History, Recommendation};
use crate::recommender::calendar::is_special_day;
use crate::recommender::constants::{GREEN_BELOW_AVERAGE, NEVER_VISITED, RED_ABOVE_AVERAGE};
use crate::recommender::history::monthly_stats;

/// Recency clause is dropped entirely below this many days.
const RECENT_MENTION_DAYS: i64 = 7;

/// Above this, the recency clause switches to the long-absence wording.
const LONG_ABSENCE_DAYS: i64 = 14;

/// Human-readable justification for a recommendation.
///
/// Template clauses joined by single spaces. Can be empty: a forced repeat
/// visited within the last week on an under-budget day with a cheap item
/// produces no clause at all.
pub fn explain(recommendation: &Recommendation, history: &History, date: NaiveDate) -> String {
    let stats = monthly_stats(history, date);
    let special = is_special_day(date);

    let mut parts: Vec<String> = Vec::new();

    let days = recommendation.days_since_visit;
    if days >= NEVER_VISITED {
        parts.push("You've never been here before!".to_string());
    } else if days > LONG_ABSENCE_DAYS {
        parts.push(format!("It's been {days} days since your last visit."));
    } else if days > RECENT_MENTION_DAYS {
        parts.push(format!("Last visited {days} days ago."));
    }

    if special {
        parts.push("It's Thursday! Treat yourself - no budget restrictions today.".to_string());
    } else {
        let price = recommendation.price;
        let avg = stats.current_average;

        if avg > RED_ABOVE_AVERAGE {
            parts.push(format!(
                "At {price} SAR, this helps bring your monthly average down from {avg} SAR."
            ));
        } else if avg < GREEN_BELOW_AVERAGE && f64::from(price) > RED_ABOVE_AVERAGE {
            parts.push(format!(
                "Your average is low ({avg} SAR), so you can treat yourself today!"
            ));
        } else if avg >= GREEN_BELOW_AVERAGE && avg <= RED_ABOVE_AVERAGE {
            parts.push(format!("Your monthly average ({avg} SAR) is on track."));
        }
    }

    parts.join(" ")
}
