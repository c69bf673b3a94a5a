use crate::shared::core::primitives::{EntryId, UserId};
use serde::{Deserialize, Serialize};

/// A diary post as stored by the backend.
///
/// `date` and `source_time` are stamped in the source zone when the entry is
/// published and are never recalculated. `is_hidden` is the only field that
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub content: String,
    pub date: String,
    pub source_time: String,
    pub image_urls: Option<Vec<String>>,
    pub author_id: UserId,
    pub is_hidden: bool,
    pub created_at: i64,
}

/// Insert payload. The backend assigns `id` and `created_at`; new entries are
/// always visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub content: String,
    pub date: String,
    pub source_time: String,
    pub image_urls: Option<Vec<String>>,
    pub author_id: UserId,
}

impl NewEntry {
    pub fn into_entry(self, id: EntryId, created_at: i64) -> Entry {
        Entry {
            id,
            content: self.content,
            date: self.date,
            source_time: self.source_time,
            image_urls: self.image_urls,
            author_id: self.author_id,
            is_hidden: false,
            created_at,
        }
    }
}
