//! Date utility functions
//!
//! Week arithmetic and human-readable formatting. Every function that needs
//! "today" takes it as an argument instead of reading the system clock.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Add a signed number of days, saturating at the calendar bounds
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// First day of the week containing `day`
pub fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    add_days(day, -(days_since_week_start(day, week_start) as i64))
}

/// Index (0-6) of `day` inside its week
pub fn days_since_week_start(day: NaiveDate, week_start: Weekday) -> u8 {
    let day_idx = day.weekday().num_days_from_monday() as i64;
    let start_idx = week_start.num_days_from_monday() as i64;
    ((7 + day_idx - start_idx) % 7) as u8
}

/// Parse a configured week start; only "sunday" and "monday" are accepted
pub fn parse_week_start(raw: &str) -> Option<Weekday> {
    match raw.trim().to_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        _ => None,
    }
}

/// Three-letter weekday label
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Format a date relative to `today` ("today", "tomorrow", "last Friday", ...)
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Header line for a week, e.g. "Oct 18 - Oct 24, 2026"
pub fn format_week_range(first: NaiveDate, last: NaiveDate) -> String {
    if first.year() == last.year() {
        format!("{} - {}", first.format("%b %d"), last.format("%b %d, %Y"))
    } else {
        format!("{} - {}", first.format("%b %d, %Y"), last.format("%b %d, %Y"))
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
