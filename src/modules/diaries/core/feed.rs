use crate::modules::diaries::core::entry::Entry;
use crate::modules::diaries::core::user::User;
use crate::shared::core::primitives::{EntryId, UNKNOWN_USER, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An entry as shown in the feed: attributed to its author and flagged when
/// the viewer wrote it. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEntry {
    pub id: EntryId,
    pub content: String,
    pub date: String,
    pub source_time: String,
    pub image_urls: Option<Vec<String>>,
    pub author_id: UserId,
    pub created_at: i64,
    pub author_nickname: String,
    pub is_owner: bool,
}

/// Joins entry rows with their authors for `viewer_id`.
///
/// Hidden entries are dropped and the remaining ones keep their input order.
/// `raw_users` is `None` when the author lookup failed; every entry then falls
/// back to [`UNKNOWN_USER`] instead of the whole feed failing. Without a viewer
/// nothing is owned.
pub fn aggregate(
    raw_entries: Vec<Entry>,
    raw_users: Option<&[User]>,
    viewer_id: Option<&str>,
) -> Vec<DisplayEntry> {
    let nicknames: HashMap<&str, &str> = raw_users
        .unwrap_or_default()
        .iter()
        .filter_map(|user| Some((user.id.as_str(), user.display_name()?)))
        .collect();

    raw_entries
        .into_iter()
        .filter(|entry| !entry.is_hidden)
        .map(|entry| {
            let author_nickname = nicknames
                .get(entry.author_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_USER)
                .to_string();
            let is_owner = viewer_id == Some(entry.author_id.as_str());
            DisplayEntry {
                id: entry.id,
                content: entry.content,
                date: entry.date,
                source_time: entry.source_time,
                image_urls: entry.image_urls,
                author_id: entry.author_id,
                created_at: entry.created_at,
                author_nickname,
                is_owner,
            }
        })
        .collect()
}
