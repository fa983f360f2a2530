//! Date Helpers
//!
//! Client clock and vi-VN style date display.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Current time as an RFC 3339 string (used for optimistic records)
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Current wall-clock time in milliseconds since the epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy`, or the input unchanged when it cannot be parsed
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM`, or the input unchanged when it cannot be parsed
pub fn format_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}
