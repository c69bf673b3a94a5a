use crate::shared::time::convert::format_clock;
use crate::shared::time::countdown::{Countdown, compute_countdown};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTime {
    pub zone: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub zones: Vec<ZoneTime>,
    pub countdown: Countdown,
    pub taken_at: i64,
}

/// Current wall time in every zone, in the given order, plus the countdown
/// to `target`.
pub fn tick_clock(now: DateTime<Utc>, zones: &[Tz], target: &DateTime<FixedOffset>) -> ClockReading {
    ClockReading {
        zones: zones
            .iter()
            .map(|zone| ZoneTime {
                zone: zone.name().to_string(),
                time: format_clock(now, *zone),
            })
            .collect(),
        countdown: compute_countdown(target, &now),
        taken_at: now.timestamp_millis(),
    }
}

/// Time left until the next `:00` second boundary. Never zero, so a tick
/// scheduled exactly on the boundary waits a full minute.
pub fn delay_until_next_minute(now: DateTime<Utc>) -> Duration {
    let into_minute_ms = u64::from(now.second()) * 1_000 + u64::from(now.timestamp_subsec_millis());
    Duration::from_millis(60_000 - into_minute_ms.min(59_999))
}

#[cfg(test)]
mod tick_clock_tests {
    use super::*;
    use crate::shared::time::countdown::parse_instant;
    use chrono::TimeZone;
    use chrono_tz::{Asia, Europe};
    use rstest::rstest;

    #[rstest]
    fn it_should_read_the_time_in_every_zone_in_order() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 3, 0, 0).unwrap();
        let target = parse_instant("2025-06-11T12:00:00+08:00").unwrap();
        let reading = tick_clock(now, &[Asia::Shanghai, Europe::London], &target);

        assert_eq!(
            reading.zones,
            vec![
                ZoneTime { zone: "Asia/Shanghai".into(), time: "11:00".into() },
                ZoneTime { zone: "Europe/London".into(), time: "04:00".into() },
            ]
        );
        assert_eq!(reading.countdown, Countdown { days: 1, hours: 1 });
        assert_eq!(reading.taken_at, now.timestamp_millis());
    }

    #[rstest]
    #[case(0, 0, 60_000)]
    #[case(15, 250, 44_750)]
    #[case(59, 999, 1)]
    fn it_should_align_to_the_top_of_the_minute(
        #[case] second: u32,
        #[case] millis: u32,
        #[case] expected_ms: u64,
    ) {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 10, 3, 0, second)
            .unwrap()
            .with_nanosecond(millis * 1_000_000)
            .unwrap();
        assert_eq!(delay_until_next_minute(now), Duration::from_millis(expected_ms));
    }
}
