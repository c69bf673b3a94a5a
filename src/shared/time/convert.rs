// Wall-clock conversion between named zones.
//
// Entries are stamped with a calendar date and an `HH:MM` time in the source
// zone. Rendering them in a second zone goes through an absolute instant built
// from the source zone's rules for that date, so daylight saving on either
// side is honoured and the host's own zone never leaks in.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const CLOCK_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonePair {
    pub source: Tz,
    pub target: Tz,
}

impl ZonePair {
    pub fn new(source: Tz, target: Tz) -> Self {
        Self { source, target }
    }
}

/// Accepts `YYYY/MM/DD` as written by the poster and `YYYY-MM-DD`.
pub fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    let normalized = date.trim().replace('/', "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

pub fn parse_clock_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}

/// Renders `local_time` on `date`, read in `source`, as wall-clock time in
/// `target`. `None` when an input is blank or the pair is not a real instant
/// in the source zone.
pub fn convert_local_time(date: &str, local_time: &str, source: Tz, target: Tz) -> Option<String> {
    if date.trim().is_empty() || local_time.trim().is_empty() {
        return None;
    }
    let naive = parse_calendar_date(date)?.and_time(parse_clock_time(local_time)?);
    let instant = source.from_local_datetime(&naive).earliest()?;
    Some(instant.with_timezone(&target).format(CLOCK_FORMAT).to_string())
}

pub fn format_clock(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format(CLOCK_FORMAT).to_string()
}

pub fn format_date(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format(DATE_FORMAT).to_string()
}
