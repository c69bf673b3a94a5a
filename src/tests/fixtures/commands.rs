// Shared test builders for use case commands.

use crate::modules::diaries::use_cases::hide_entry::command::HideEntry;
use crate::modules::diaries::use_cases::publish_entry::command::PublishEntry;
use chrono::{DateTime, TimeZone, Utc};

pub struct PublishEntryBuilder {
    inner: PublishEntry,
}

impl Default for PublishEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PublishEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: PublishEntry {
                author_id: "user-fixed-0001".to_string(),
                content: "This is a test".to_string(),
                image_urls: Vec::new(),
                submitted_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            },
        }
    }

    pub fn author_id(mut self, v: impl Into<String>) -> Self {
        self.inner.author_id = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn image_urls(mut self, v: Vec<&str>) -> Self {
        self.inner.image_urls = v.into_iter().map(str::to_string).collect();
        self
    }

    pub fn submitted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.submitted_at = v;
        self
    }

    pub fn build(self) -> PublishEntry {
        self.inner
    }
}

pub fn make_hide_entry(entry_id: i64, requester_id: &str) -> HideEntry {
    HideEntry {
        entry_id,
        requester_id: requester_id.to_string(),
    }
}
