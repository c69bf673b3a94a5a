use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::diaries::use_cases::publish_entry::command::PublishEntry;
use crate::shell::graphql::{require_session, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PublishMutation;

#[Object]
impl PublishMutation {
    async fn publish_entry(
        &self,
        context: &Context<'_>,
        content: String,
        image_urls: Option<Vec<String>>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let session = require_session(context)?;

        let command = PublishEntry {
            author_id: session.user_id.clone(),
            content,
            image_urls: image_urls.unwrap_or_default(),
            submitted_at: Utc::now(),
        };

        let entry_id = state
            .publish_entry
            .handle(command)
            .await
            .map_err(to_gql_error)?;
        Ok(ID(entry_id.to_string()))
    }
}
