use crate::shared::core::primitives::{EntryId, UserId};

/// Soft delete request. `requester_id` travels with the id all the way to the
/// store so only the author's own row can match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideEntry {
    pub entry_id: EntryId,
    pub requester_id: UserId,
}
