//! Date helpers for backend date strings. The API sends either plain dates
//! (`2025-03-14`) or ISO datetimes (`2025-03-14T00:00:00.000Z`); only the
//! calendar day matters to the client.

use chrono::{DateTime, Local, NaiveDate};

/// Parses the calendar day out of a backend date or datetime string.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Renders a backend date for tables and cards; unparsable input is shown as-is.
pub fn display_day(value: &str) -> String {
    parse_day(value)
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Value for `<input type="date">` (`YYYY-MM-DD`).
pub fn input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_plain_and_iso_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14);
        assert_eq!(parse_day("2025-03-14"), expected);
        assert_eq!(parse_day("2025-03-14T00:00:00.000Z"), expected);
        assert_eq!(parse_day("2025-03-14T08:30:00+05:30"), expected);
        assert_eq!(parse_day(" 2025-03-14 "), expected);
    }

    #[test]
    fn parse_day_rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("next tuesday"), None);
        assert_eq!(parse_day("2025-13-40"), None);
    }

    #[test]
    fn display_day_falls_back_to_raw_value() {
        assert_eq!(display_day("2025-03-14"), "14 Mar 2025");
        assert_eq!(display_day("soon"), "soon");
    }

    #[test]
    fn input_value_is_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
        assert_eq!(input_value(date), "2025-01-05");
    }
}
