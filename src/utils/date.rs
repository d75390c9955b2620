use chrono::{DateTime, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date as stored by the backend.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (keeping the calendar
/// date as written). Empty strings mean "no date".
pub fn parse_store_date(s: &str) -> Result<Option<NaiveDate>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Some(d) = parse_date(s) {
        return Ok(Some(d));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| s.to_string())
}

/// Date formatted for display using the configured pattern.
pub fn format_date(date: Option<NaiveDate>, pattern: &str) -> String {
    match date {
        Some(d) => d.format(pattern).to_string(),
        None => String::new(),
    }
}
