// Background clock ticker.
//
// Publishes a fresh ClockReading through a watch channel, either at the top of
// every minute or on a fixed interval. The task is owned by ClockTicker and is
// cancelled when the ticker is shut down or dropped, so no timer outlives the
// view that started it.

use crate::shared::time::clock::{ClockReading, delay_until_next_minute, tick_clock};
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSchedule {
    MinuteAligned,
    Every(Duration),
}

impl TickSchedule {
    /// Time to wait from `now` until the next tick. Minute-aligned ticks are
    /// re-measured against the wall clock every time so they never drift off `:00`.
    pub fn next_delay(&self, now: DateTime<Utc>) -> Duration {
        match self {
            TickSchedule::MinuteAligned => delay_until_next_minute(now),
            TickSchedule::Every(period) => *period,
        }
    }
}

pub struct ClockTicker {
    token: CancellationToken,
    readings: watch::Receiver<ClockReading>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Computes one reading immediately, then keeps it fresh on `schedule`.
    pub fn spawn(zones: Vec<Tz>, target: DateTime<FixedOffset>, schedule: TickSchedule) -> Self {
        Self::spawn_with_clock(zones, target, schedule, Utc::now)
    }

    /// Same as [`ClockTicker::spawn`], reading wall time from `clock`.
    pub fn spawn_with_clock<C>(
        zones: Vec<Tz>,
        target: DateTime<FixedOffset>,
        schedule: TickSchedule,
        clock: C,
    ) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let (sender, readings) = watch::channel(tick_clock(clock(), &zones, &target));
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            loop {
                let delay = schedule.next_delay(clock());
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {
                        let reading = tick_clock(clock(), &zones, &target);
                        if sender.send(reading).is_err() {
                            warn!("clock ticker has no readers left");
                            break;
                        }
                    }
                }
            }
            debug!("clock ticker stopped");
        });

        Self {
            token,
            readings,
            handle: Some(handle),
        }
    }

    pub fn latest(&self) -> ClockReading {
        self.readings.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.readings.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(error) = handle.await {
                warn!(%error, "clock ticker task did not finish cleanly");
            }
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
