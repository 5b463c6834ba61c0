// src/time.rs
//
// Timestamp parsing and the two "how long ago" formatters.
// Everything takes `now` explicitly; callers pass `Utc::now()`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::consts::{DATE_FMT, DATETIME_FMT, TIME_FMT};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Parse `scraped_at`.
///
/// - RFC 3339 (`2024-01-01T00:00:00Z`, `...+10:00`) → as given
/// - naive date-time (`2025-10-14T10:30:00`) → local wall-clock time
/// - bare date (`2025-10-14`) → midnight UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Elapsed milliseconds, never negative (future timestamps count as "now").
fn elapsed_ms(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().max(0)
}

/// Job age: `{N}m ago` / `{N}h ago` / `{N}d ago`, or the local date past a week.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let ms = elapsed_ms(then, now);
    let mins = ms / MINUTE_MS;
    let hours = ms / HOUR_MS;
    let days = ms / DAY_MS;

    if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format_date(then)
    }
}

/// "Updated ..." label: `just now` / `{N} minutes ago` / local time of day.
pub fn format_last_update(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = elapsed_ms(then, now) / 1000;
    if secs < 60 {
        s!("just now")
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else {
        format_time(then)
    }
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATE_FMT).to_string()
}

pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(TIME_FMT).to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATETIME_FMT).to_string()
}

/// Relative age of a raw `scraped_at`; unparseable input is shown as-is.
pub fn relative_or_raw(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(ts) => format_relative(ts, now),
        None => raw.to_string(),
    }
}

/// Absolute local date-time of a raw `scraped_at`; unparseable input is kept.
pub fn datetime_or_raw(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => format_datetime(ts),
        None => raw.to_string(),
    }
}
