use crate::modules::diaries::core::entry::NewEntry;
use crate::modules::diaries::use_cases::publish_entry::{
    command::PublishEntry,
    decision::{DecideError, Decision},
};
use crate::shared::time::convert::{format_clock, format_date};
use chrono_tz::Tz;

/// Stamps the entry with the submission date and time as read in the source
/// zone. The stamp is final: nothing recomputes it later.
pub fn decide_publish(command: PublishEntry, source_zone: Tz) -> Decision {
    if command.content.trim().is_empty() && command.image_urls.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyEntry,
        };
    }

    let image_urls = (!command.image_urls.is_empty()).then_some(command.image_urls);
    Decision::Accepted {
        entry: NewEntry {
            content: command.content,
            date: format_date(command.submitted_at, source_zone),
            source_time: format_clock(command.submitted_at, source_zone),
            image_urls,
            author_id: command.author_id,
        },
    }
}
