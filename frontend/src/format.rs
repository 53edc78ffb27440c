use chrono::{Datelike, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid date";

/// `April 29th, 2024`
pub fn long_date(dt: &NaiveDateTime) -> String {
    format!("{} {}, {}", dt.format("%B"), ordinal(dt.day()), dt.year())
}

/// `10:00 AM`
pub fn time_of_day(dt: &NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Shortest decimal form, so `25.0` prints as `$25`.
pub fn price(amount: f64) -> String {
    format!("${}", amount)
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}
