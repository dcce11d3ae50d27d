use chrono::{Datelike, Duration, NaiveDate, Weekday};
use anyhow::{anyhow, Result};

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parses a period boundary given on the command line.
///
/// `today` is supplied by the caller so the result never depends on the clock.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let (first, last) = month_bounds(today);

    match input.trim().to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "som" => return Ok(first),
        "eom" => return Ok(last),
        _ => {}
    }

    if let Ok(d) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(date.day0() as i64);
    let last = first
        .iter_days()
        .take_while(|d| d.month() == date.month())
        .last()
        .unwrap_or(date);
    (first, last)
}

/// Every date from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// English month name, e.g. "September".
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday: '{}'", s)),
    }
}
