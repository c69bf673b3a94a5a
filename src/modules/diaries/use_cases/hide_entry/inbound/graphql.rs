use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::diaries::use_cases::hide_entry::command::HideEntry;
use crate::shell::graphql::{require_session, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct HideMutation;

#[Object]
impl HideMutation {
    async fn hide_entry(&self, context: &Context<'_>, entry_id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let session = require_session(context)?;

        let command = HideEntry {
            entry_id,
            requester_id: session.user_id.clone(),
        };
        state.hide_entry.handle(command).await.map_err(to_gql_error)?;
        Ok(true)
    }
}
