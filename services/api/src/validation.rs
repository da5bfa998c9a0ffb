//! Input validation utilities

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Validate that a required text field is present and non-blank
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }

    Ok(())
}

/// Validate a booking time range
pub fn validate_time_range(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<(), String> {
    if end_time <= start_time {
        return Err("End time must be after start time".to_string());
    }

    Ok(())
}

/// Validate a price in whole currency units
pub fn validate_price(field: &str, value: i64) -> Result<(), String> {
    if value < 0 {
        return Err(format!("{} cannot be negative", field));
    }

    Ok(())
}

/// Validate a phone number: optional leading +, then 7 to 15 digits
pub fn validate_phone_number(phone_number: &str) -> Result<(), String> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone_number) {
        return Err("Invalid phone number format".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn required_rejects_blank_values() {
        assert!(validate_required("name", "Atelier Nord").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn time_range_must_end_after_it_starts() {
        let start = Utc::now();

        assert!(validate_time_range(start, start + Duration::hours(2)).is_ok());
        assert!(validate_time_range(start, start).is_err());
        assert!(validate_time_range(start, start - Duration::minutes(30)).is_err());
    }

    #[test]
    fn prices_cannot_be_negative() {
        assert!(validate_price("hourly_price", 0).is_ok());
        assert!(validate_price("hourly_price", 45_000).is_ok());
        assert!(validate_price("hourly_price", -1).is_err());
    }

    #[test]
    fn phone_numbers_are_digits_with_optional_plus() {
        assert!(validate_phone_number("+989121234567").is_ok());
        assert!(validate_phone_number("02188776655").is_ok());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("not-a-number").is_err());
    }
}
