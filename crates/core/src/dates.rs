//! Lenient date parsing.
//!
//! Dates reach the validator as free-form strings written by older clients. Parsing accepts
//! ISO-8601 dates and date-times and RFC 2822 timestamps. It is deliberately lenient about
//! the calendar: any day of month from 1 to 31 is accepted and days past the end of the month
//! roll over into the next one (`2023-02-30` is 2 March 2023).
//!
//! Values without a UTC offset are read as UTC.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ISO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[Tt ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]+))?)?(Z|z|[+-][0-9]{2}:?[0-9]{2})?)?$",
    )
    .expect("ISO date pattern is a valid regex")
});

/// Parses `input` into a UTC instant, or `None` if it is not a recognised date.
pub fn parse_lenient_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_PATTERN.captures(input) {
        return from_iso_captures(&caps);
    }

    DateTime::parse_from_rfc2822(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn from_iso_captures(caps: &Captures<'_>) -> Option<DateTime<Utc>> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // Day overflow rolls into the following month.
    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?;

    let hour = capture_u32(caps, 4)?.unwrap_or(0);
    let minute = capture_u32(caps, 5)?.unwrap_or(0);
    let second = capture_u32(caps, 6)?.unwrap_or(0);
    let nanos = match caps.get(7) {
        Some(m) => fraction_to_nanos(m.as_str())?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;

    let offset_secs = match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") | Some("z") => 0,
        Some(offset) => parse_offset_secs(offset)?,
    };
    let offset = FixedOffset::east_opt(offset_secs)?;

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `Some(None)` when the group did not participate, `None` when it failed to parse.
fn capture_u32(caps: &Captures<'_>, idx: usize) -> Option<Option<u32>> {
    match caps.get(idx) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

fn fraction_to_nanos(digits: &str) -> Option<u32> {
    if !digits.is_ascii() {
        return None;
    }
    let digits = &digits[..digits.len().min(9)];
    let value: u32 = digits.parse().ok()?;
    let scale = 10u32.checked_pow(9 - digits.len() as u32)?;
    value.checked_mul(scale)
}

fn parse_offset_secs(offset: &str) -> Option<i32> {
    let (sign, rest) = match offset.as_bytes().first()? {
        b'+' => (1, &offset[1..]),
        b'-' => (-1, &offset[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(sign * (hours * 3600 + minutes * 60))
}
