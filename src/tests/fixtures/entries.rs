// Shared test builder for diary entries.

use crate::modules::diaries::core::entry::{Entry, NewEntry};
use crate::shared::core::primitives::EntryId;

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: Entry {
                id: 1,
                content: "This is a test".to_string(),
                date: "2025/06/01".to_string(),
                source_time: "15:30".to_string(),
                image_urls: None,
                author_id: "user-fixed-0001".to_string(),
                is_hidden: false,
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn id(mut self, v: EntryId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn source_time(mut self, v: impl Into<String>) -> Self {
        self.inner.source_time = v.into();
        self
    }

    pub fn image_urls(mut self, v: Vec<&str>) -> Self {
        self.inner.image_urls = Some(v.into_iter().map(str::to_string).collect());
        self
    }

    pub fn author_id(mut self, v: impl Into<String>) -> Self {
        self.inner.author_id = v.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.inner.is_hidden = true;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }

    pub fn build_new(self) -> NewEntry {
        NewEntry {
            content: self.inner.content,
            date: self.inner.date,
            source_time: self.inner.source_time,
            image_urls: self.inner.image_urls,
            author_id: self.inner.author_id,
        }
    }
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let entry = EntryBuilder::new()
            .id(7)
            .content("desc")
            .date("2024/01/02")
            .source_time("08:15")
            .image_urls(vec!["a.jpg"])
            .author_id("tester")
            .hidden()
            .created_at(3333)
            .build();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.content, "desc");
        assert_eq!(entry.date, "2024/01/02");
        assert_eq!(entry.source_time, "08:15");
        assert_eq!(entry.image_urls, Some(vec!["a.jpg".to_string()]));
        assert_eq!(entry.author_id, "tester");
        assert!(entry.is_hidden);
        assert_eq!(entry.created_at, 3333);
    }
}
