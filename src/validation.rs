// src/validation.rs

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `text` is a calendar date written as YYYY-MM-DD.
pub fn validate_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
}

/// The integer value of `text`, if it has one. The sign is not checked here.
pub fn parse_time_spent(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// True when `text` parses as an integer.
pub fn validate_time_spent(text: &str) -> bool {
    parse_time_spent(text).is_some()
}
