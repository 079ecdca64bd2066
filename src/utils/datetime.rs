//! Date utility functions
//!
//! Column keys for the tracker are calendar days in `YYYY-MM-DD` form. This
//! module generates the rolling window of keys and formats them for column
//! headers.

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, Local, NaiveDate};

/// Canonical key format for date columns
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Default header format: short month name and day number (e.g. "Mar 7")
pub const HEADER_DATE_FORMAT: &str = "%b %-d";

/// Parse a date key in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_KEY_FORMAT)
}

/// Format a NaiveDate as a date key
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_KEY_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the rolling window of `days_back` consecutive date keys ending at
/// (and including) `today`, oldest first. The window stops early at the
/// earliest representable date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tasktrail::utils::datetime::date_window;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// assert_eq!(date_window(3, today), vec!["2025-02-28", "2025-03-01", "2025-03-02"]);
/// ```
pub fn date_window(days_back: u32, today: NaiveDate) -> Vec<String> {
    let mut window: Vec<String> = (0..days_back)
        .map_while(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(format_ymd)
        .collect();
    window.reverse();
    window
}

/// Format a date key for a column header.
///
/// Keys that don't parse as dates are returned unchanged.
pub fn format_header_date(date_key: &str, format: &str) -> String {
    match parse_date(date_key) {
        Ok(date) if is_valid_format(format) => date.format(format).to_string(),
        _ => date_key.to_string(),
    }
}

/// Check that a strftime format string contains no invalid specifiers
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(date_window(4, today), vec!["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]);
    }

    #[test]
    fn test_window_includes_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(date_window(2, today), vec!["2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_window_stops_at_earliest_date() {
        let today = NaiveDate::MIN.succ_opt().unwrap();
        let window = date_window(5, today);
        assert_eq!(window, vec![format_ymd(NaiveDate::MIN), format_ymd(today)]);
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(date_window(0, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).is_empty());
    }

    #[test]
    fn test_invalid_format_detected() {
        assert!(is_valid_format(HEADER_DATE_FORMAT));
        assert!(!is_valid_format("%Q"));
    }
}
