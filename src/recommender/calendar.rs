use chrono::{Datelike, NaiveDate, Weekday};

/// Label for a Saudi work day (Sunday through Thursday), `None` on weekends.
pub fn day_label(date: NaiveDate) -> Option<&'static str> {
    match date.weekday() {
        Weekday::Sun => Some("Sunday"),
        Weekday::Mon => Some("Monday"),
        Weekday::Tue => Some("Tuesday"),
        Weekday::Wed => Some("Wednesday"),
        Weekday::Thu => Some("Thursday"),
        Weekday::Fri | Weekday::Sat => None,
    }
}

/// Whether the date falls in the Sunday–Thursday work week.
pub fn is_work_day(date: NaiveDate) -> bool {
    day_label(date).is_some()
}

/// Thursday is exempt from budget scoring.
pub fn is_special_day(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Thu
}
