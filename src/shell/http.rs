use axum::{
    Extension, Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::diaries::errors::ApplicationError;
use crate::modules::diaries::use_cases::attach_images::inbound::http as attach_http;
use crate::modules::diaries::use_cases::hide_entry::inbound::http as hide_http;
use crate::modules::diaries::use_cases::list_feed::inbound::http as feed_http;
use crate::modules::diaries::use_cases::publish_entry::inbound::http as publish_http;
use crate::modules::diaries::use_cases::read_clock::inbound::http as clock_http;
use crate::modules::diaries::use_cases::sign_in::inbound::http as sign_in_http;
use crate::modules::diaries::use_cases::update_nickname::inbound::http as nickname_http;
use crate::shell::graphql::{self, build_schema};
use crate::shell::session::require_session;
use crate::shell::state::AppState;

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApplicationError::AuthRequired => StatusCode::UNAUTHORIZED,
            ApplicationError::MutationRejected(_) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::CONFLICT,
            ApplicationError::Busy(_) => StatusCode::TOO_MANY_REQUESTS,
            ApplicationError::UploadFailure(_) => StatusCode::BAD_GATEWAY,
            ApplicationError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/sign-in", post(sign_in_http::handle))
        .route("/clock", get(clock_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(build_schema(state.clone())))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/feed", get(feed_http::handle))
        .route("/entries", post(publish_http::handle))
        .route("/entries/{entry_id}/hide", post(hide_http::handle))
        .route("/nickname", put(nickname_http::handle))
        .route("/images", post(attach_http::handle))
        .layer(middleware::from_fn_with_state(state.clone(), require_session))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
