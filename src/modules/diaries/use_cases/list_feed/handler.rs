use crate::modules::diaries::core::feed::aggregate;
use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::list_feed::view::FeedItem;
use crate::shared::core::primitives::{Session, UserId};
use crate::shared::infrastructure::backend::{EntryQuery, EntryStore, UserDirectory};
use crate::shared::time::convert::ZonePair;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, warn};

pub struct ListFeedHandler<TEntries, TUsers>
where
    TEntries: EntryStore + 'static,
    TUsers: UserDirectory + 'static,
{
    entries: Arc<TEntries>,
    users: Arc<TUsers>,
    zones: ZonePair,
}

impl<TEntries, TUsers> ListFeedHandler<TEntries, TUsers>
where
    TEntries: EntryStore + 'static,
    TUsers: UserDirectory + 'static,
{
    pub fn new(entries: Arc<TEntries>, users: Arc<TUsers>, zones: ZonePair) -> Self {
        Self {
            entries,
            users,
            zones,
        }
    }

    /// Visible entries, newest first, attributed for `viewer`.
    ///
    /// A failed author lookup degrades every nickname to the fallback; only a
    /// failed entry read fails the feed.
    pub async fn handle(&self, viewer: &Session) -> Result<Vec<FeedItem>, ApplicationError> {
        let raw_entries = self
            .entries
            .query_entries(EntryQuery::visible_newest_first())
            .await
            .inspect_err(|e| error!(error = %e, "failed to fetch diary entries"))?;

        let author_ids: HashSet<UserId> = raw_entries
            .iter()
            .map(|entry| entry.author_id.clone())
            .collect();
        let raw_users = if author_ids.is_empty() {
            Some(Vec::new())
        } else {
            match self.users.query_users(&author_ids).await {
                Ok(users) => Some(users),
                Err(e) => {
                    warn!(error = %e, "author lookup failed, using fallback nicknames");
                    None
                }
            }
        };

        Ok(aggregate(raw_entries, raw_users.as_deref(), Some(viewer.user_id()))
            .into_iter()
            .map(|entry| FeedItem::localize(entry, self.zones))
            .collect())
    }
}
