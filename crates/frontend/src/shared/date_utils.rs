/// Utilities for date formatting
///
/// Provides consistent date formatting across the portal pages
use chrono::NaiveDate;

/// Long form used on cards
/// Example: 2025-02-10 -> "February 10, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short form used in compact lists and the schedule
/// Example: 2025-02-10 -> "Feb 10, 2025"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse the value of an `<input type="date">`.
/// Returns None for an empty or malformed value.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value accepted by `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 2, 10)), "February 10, 2025");
        assert_eq!(format_date(date(2024, 12, 1)), "December 1, 2024");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(date(2025, 1, 15)), "Jan 15, 2025");
    }

    #[test]
    fn test_input_value_round_trip() {
        let d = date(2025, 3, 5);
        assert_eq!(to_input_value(d), "2025-03-05");
        assert_eq!(parse_input_date("2025-03-05"), Some(d));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("03/05/2025"), None);
    }
}
