// Typed runtime configuration read from DIARY_* environment variables.

use crate::shared::time::convert::ZonePair;
use crate::shared::time::countdown::parse_instant;
use crate::shared::time::ticker::TickSchedule;
use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_SOURCE_ZONE: &str = "Asia/Shanghai";
const DEFAULT_TARGET_ZONE: &str = "Europe/London";
const DEFAULT_MEETING_AT: &str = "2025-06-11T12:00:00+08:00";
const DEFAULT_CLOCK_INTERVAL_SECS: &str = "60";
const DEFAULT_LOGIN_DOMAIN: &str = "local.com";
const DEFAULT_IMAGE_BUCKET: &str = "diary-images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub zones: ZonePair,
    pub meeting_at: DateTime<FixedOffset>,
    pub clock_schedule: TickSchedule,
    pub login_domain: String,
    pub image_bucket: String,
    pub accounts: Vec<SeedAccount>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = read("DIARY_PORT", DEFAULT_PORT)
            .parse()
            .context("DIARY_PORT must be a port number")?;
        let source = parse_zone(&read("DIARY_SOURCE_ZONE", DEFAULT_SOURCE_ZONE))
            .context("invalid DIARY_SOURCE_ZONE")?;
        let target = parse_zone(&read("DIARY_TARGET_ZONE", DEFAULT_TARGET_ZONE))
            .context("invalid DIARY_TARGET_ZONE")?;
        let meeting_at = parse_instant(&read("DIARY_MEETING_AT", DEFAULT_MEETING_AT))
            .context("DIARY_MEETING_AT must be an RFC 3339 instant")?;
        let interval: u64 = read("DIARY_CLOCK_INTERVAL_SECS", DEFAULT_CLOCK_INTERVAL_SECS)
            .parse()
            .context("DIARY_CLOCK_INTERVAL_SECS must be a whole number of seconds")?;
        let clock_schedule = match interval {
            0 => bail!("DIARY_CLOCK_INTERVAL_SECS must be positive"),
            60 => TickSchedule::MinuteAligned,
            secs => TickSchedule::Every(Duration::from_secs(secs)),
        };
        let accounts = parse_accounts(&lookup("DIARY_ACCOUNTS").unwrap_or_default())
            .context("DIARY_ACCOUNTS must be a comma separated list of user:password")?;

        Ok(Self {
            host: read("DIARY_HOST", DEFAULT_HOST),
            port,
            zones: ZonePair::new(source, target),
            meeting_at,
            clock_schedule,
            login_domain: read("DIARY_LOGIN_DOMAIN", DEFAULT_LOGIN_DOMAIN),
            image_bucket: read("DIARY_IMAGE_BUCKET", DEFAULT_IMAGE_BUCKET),
            accounts,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("unknown time zone {name:?}: {e}"))
}

fn parse_accounts(raw: &str) -> Result<Vec<SeedAccount>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once(':') {
            Some((username, password)) if !username.trim().is_empty() => Ok(SeedAccount {
                username: username.trim().to_string(),
                password: password.to_string(),
            }),
            _ => bail!("malformed account {pair:?}"),
        })
        .collect()
}
