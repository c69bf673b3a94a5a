use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

impl Countdown {
    /// Negative components mean the target instant is behind us.
    pub fn has_passed(&self) -> bool {
        self.days < 0 || self.hours < 0
    }
}

/// Whole days and leftover whole hours between `now` and `target`, from the
/// exact millisecond difference, truncated toward zero.
pub fn compute_countdown<TTarget, TNow>(target: &DateTime<TTarget>, now: &DateTime<TNow>) -> Countdown
where
    TTarget: TimeZone,
    TNow: TimeZone,
{
    let remaining_ms = target.timestamp_millis() - now.timestamp_millis();
    Countdown {
        days: remaining_ms / MS_PER_DAY,
        hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
    }
}

pub fn parse_instant(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim())
}
