use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::publish_entry::command::PublishEntry;
use crate::modules::diaries::use_cases::publish_entry::decide::decide_publish;
use crate::modules::diaries::use_cases::publish_entry::decision::Decision;
use crate::shared::core::primitives::EntryId;
use crate::shared::infrastructure::backend::EntryStore;
use crate::shared::infrastructure::in_flight::{Action, InFlightRegistry};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info};

pub struct PublishEntryHandler<TEntries>
where
    TEntries: EntryStore + 'static,
{
    entries: Arc<TEntries>,
    source_zone: Tz,
    in_flight: Arc<InFlightRegistry>,
}

impl<TEntries> PublishEntryHandler<TEntries>
where
    TEntries: EntryStore + 'static,
{
    pub fn new(entries: Arc<TEntries>, source_zone: Tz, in_flight: Arc<InFlightRegistry>) -> Self {
        Self {
            entries,
            source_zone,
            in_flight,
        }
    }

    pub async fn handle(&self, command: PublishEntry) -> Result<EntryId, ApplicationError> {
        let _guard = self
            .in_flight
            .try_begin(&command.author_id, Action::PublishEntry)
            .ok_or(ApplicationError::Busy(Action::PublishEntry))?;

        let author_id = command.author_id.clone();
        match decide_publish(command, self.source_zone) {
            Decision::Accepted { entry } => {
                let id = self
                    .entries
                    .insert_entry(entry)
                    .await
                    .inspect_err(|e| error!(error = %e, %author_id, "failed to publish entry"))?;
                info!(entry_id = id, %author_id, "entry published");
                Ok(id)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
