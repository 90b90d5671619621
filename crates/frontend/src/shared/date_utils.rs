/// Utilities for date formatting
///
/// The backend sends start dates as ISO strings, with or without a time part.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when a record has no usable date
pub const NO_DATE: &str = "N/A";

/// Format an ISO date/datetime as `YYYY-MM-DD`
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn format_start_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_start_date() {
        assert_eq!(format_start_date(Some("2024-03-15")), "2024-03-15");
        assert_eq!(format_start_date(Some("2024-03-15T00:00:00")), "2024-03-15");
        assert_eq!(
            format_start_date(Some("2024-03-15T14:02:26.123Z")),
            "2024-03-15"
        );
        assert_eq!(
            format_start_date(Some("2024-03-15T23:30:00+02:00")),
            "2024-03-15"
        );
    }

    #[test]
    fn test_missing_or_invalid() {
        assert_eq!(format_start_date(None), "N/A");
        assert_eq!(format_start_date(Some("")), "N/A");
        assert_eq!(format_start_date(Some("invalid")), "N/A");
    }
}
