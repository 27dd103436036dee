use crate::error::{HabitError, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Lenient `HH:mm` parse. Anything that is not two numeric fields yields
/// `(0, 0)`; each field is clamped on its own.
pub fn parse_day_start(raw: &str) -> (u32, u32) {
    let mut parts = raw.trim().split(':');
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return (0, 0);
    };
    match (parse_field(hours), parse_field(minutes)) {
        (Some(hours), Some(minutes)) => (hours.min(23), minutes.min(59)),
        _ => (0, 0),
    }
}

fn parse_field(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn format_day_start((hours, minutes): (u32, u32)) -> String {
    format!("{hours:02}:{minutes:02}")
}

pub fn to_day_key_at<Tz: TimeZone>(timestamp: &DateTime<Tz>, day_start: &str) -> String {
    day_key_for_local(timestamp.naive_local(), day_start)
}

/// Day key for an ISO timestamp string. Offset-qualified timestamps are
/// converted to the local zone; naive ones are taken as local wall time.
pub fn to_day_key(timestamp: &str, day_start: &str) -> Result<String> {
    let trimmed = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(to_day_key_at(&parsed.with_timezone(&Local), day_start));
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(day_key_for_local(naive, day_start));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, DAY_KEY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(day_key_for_local(midnight, day_start));
    }
    Err(HabitError::InvalidTimestamp(timestamp.to_string()))
}

fn day_key_for_local(local: NaiveDateTime, day_start: &str) -> String {
    let (hours, minutes) = parse_day_start(day_start);
    let offset = Duration::minutes(i64::from(hours * 60 + minutes));
    (local - offset).format(DAY_KEY_FORMAT).to_string()
}

pub fn today_key(day_start: &str) -> String {
    to_day_key_at(&Local::now(), day_start)
}

pub fn is_future(key: &str, day_start: &str) -> bool {
    is_future_at(key, day_start, &Local::now())
}

pub fn is_future_at<Tz: TimeZone>(key: &str, day_start: &str, now: &DateTime<Tz>) -> bool {
    key > to_day_key_at(now, day_start).as_str()
}

pub fn parse_day_key(key: &str) -> Result<NaiveDate> {
    if key.len() != 10 {
        return Err(HabitError::InvalidDayKey(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT)
        .map_err(|_| HabitError::InvalidDayKey(key.to_string()))
}

pub fn format_day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

pub fn shift_day_key(key: &str, days: i64) -> Result<String> {
    let date = parse_day_key(key)?;
    date.checked_add_signed(Duration::days(days))
        .map(format_day_key)
        .ok_or_else(|| HabitError::InvalidDayKey(key.to_string()))
}

pub fn day_keys_between(from: &str, to: &str) -> Result<Vec<String>> {
    let start = parse_day_key(from)?;
    let end = parse_day_key(to)?;
    Ok(start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(format_day_key)
        .collect())
}
