use crate::shared::core::primitives::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishEntry {
    pub author_id: UserId,
    pub content: String,
    pub image_urls: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod publish_entry_command_tests {
    use super::*;
    use crate::tests::fixtures::commands::PublishEntryBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn publish_command() -> PublishEntry {
        PublishEntryBuilder::new().build()
    }

    #[rstest]
    fn it_should_create_the_command(publish_command: PublishEntry) {
        assert_eq!(publish_command.author_id, "user-fixed-0001");
        assert_eq!(publish_command.content, "This is a test");
        assert!(publish_command.image_urls.is_empty());
    }
}
