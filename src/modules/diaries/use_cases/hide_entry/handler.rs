use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::hide_entry::command::HideEntry;
use crate::shared::infrastructure::backend::EntryStore;
use crate::shared::infrastructure::in_flight::{Action, InFlightRegistry};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const NO_SUCH_ENTRY: &str = "no such entry for this requester";

pub struct HideEntryHandler<TEntries>
where
    TEntries: EntryStore + 'static,
{
    entries: Arc<TEntries>,
    in_flight: Arc<InFlightRegistry>,
}

impl<TEntries> HideEntryHandler<TEntries>
where
    TEntries: EntryStore + 'static,
{
    pub fn new(entries: Arc<TEntries>, in_flight: Arc<InFlightRegistry>) -> Self {
        Self { entries, in_flight }
    }

    /// Hides the entry if the requester wrote it. A missing entry and someone
    /// else's entry are reported the same way.
    pub async fn handle(&self, command: HideEntry) -> Result<(), ApplicationError> {
        let _guard = self
            .in_flight
            .try_begin(&command.requester_id, Action::HideEntry)
            .ok_or(ApplicationError::Busy(Action::HideEntry))?;

        let affected = self
            .entries
            .soft_delete_entry(command.entry_id, &command.requester_id)
            .await
            .inspect_err(|e| {
                error!(error = %e, entry_id = command.entry_id, "failed to hide entry")
            })?;

        if affected == 0 {
            warn!(
                entry_id = command.entry_id,
                requester_id = %command.requester_id,
                "hide matched no entry"
            );
            return Err(ApplicationError::MutationRejected(NO_SUCH_ENTRY.into()));
        }
        info!(entry_id = command.entry_id, "entry hidden");
        Ok(())
    }
}
