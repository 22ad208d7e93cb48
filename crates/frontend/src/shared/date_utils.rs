/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y %H:%M").to_string()
}

/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}

/// Dash placeholder for records the API sent without a timestamp.
pub fn format_opt_date(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Same as [`format_opt_date`] with the time of day.
pub fn format_opt_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "Mar 15, 2024 14:02");
        assert_eq!(format_date(&ts), "Mar 15, 2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_opt_date(None), "—");
        assert_eq!(format_opt_datetime(None), "—");
    }

    #[test]
    fn test_optional_datetime_keeps_time() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 2, 9, 5, 0).unwrap();
        assert_eq!(format_opt_datetime(Some(&ts)), "Nov 02, 2024 09:05");
    }
}
