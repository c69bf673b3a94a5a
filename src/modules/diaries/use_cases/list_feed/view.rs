use crate::modules::diaries::core::feed::DisplayEntry;
use crate::shared::time::convert::{ZonePair, convert_local_time};
use serde::{Deserialize, Serialize};

/// A feed row ready for display: the attributed entry plus its time in the
/// target zone (`None` when the stored stamp cannot be read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub entry: DisplayEntry,
    pub target_time: Option<String>,
}

impl FeedItem {
    pub fn localize(entry: DisplayEntry, zones: ZonePair) -> Self {
        let target_time =
            convert_local_time(&entry.date, &entry.source_time, zones.source, zones.target);
        Self { entry, target_time }
    }
}
