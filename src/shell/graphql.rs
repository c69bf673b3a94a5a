use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, extract::State, http::HeaderMap, response::Html};
use tracing::warn;

use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::hide_entry::inbound::graphql::HideMutation;
pub use crate::modules::diaries::use_cases::list_feed::inbound::graphql::QueryRoot;
use crate::modules::diaries::use_cases::publish_entry::inbound::graphql::PublishMutation;
use crate::shared::core::primitives::Session;
use crate::shell::session::resolve_session;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(PublishMutation, HideMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// The caller's session, attached per request by [`graphql`].
pub fn require_session<'a>(context: &'a Context<'_>) -> async_graphql::Result<&'a Session> {
    context
        .data_opt::<Session>()
        .ok_or_else(|| to_gql_error(ApplicationError::AuthRequired))
}

pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    let status = error.status();
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, extensions| extensions.set("status", status.as_str()))
}

pub async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match resolve_session(&state, &headers).await {
        Ok(Some(session)) => request = request.data(session),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "session lookup failed, running query without a session"),
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
