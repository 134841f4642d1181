use chrono::{NaiveDate, NaiveDateTime};

/// Canonical date format for storage and popups: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const SLASH_DATE_FORMAT: &str = "%Y/%m/%d";

/// Parse an `observed_on` cell.
///
/// Accepts `YYYY-MM-DD`, a `YYYY-MM-DD HH:MM:SS` timestamp (time dropped),
/// or `YYYY/MM/DD`.
pub fn parse_observed_on(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }
    NaiveDate::parse_from_str(s, SLASH_DATE_FORMAT).ok()
}

/// Format a date as "YYYY-MM-DD"
pub fn format_observed_on(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
