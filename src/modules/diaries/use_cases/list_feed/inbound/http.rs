use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::shared::core::primitives::Session;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> impl IntoResponse {
    match state.list_feed.handle(&session).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod list_feed_http_inbound_tests {
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::diaries::core::user::User;
    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::tests::fixtures::entries::EntryBuilder;
    use crate::tests::fixtures::state::{make_session, make_test_state};

    use super::handle;

    fn app(backend: InMemoryBackend, viewer: &str) -> Router {
        Router::new()
            .route("/feed", get(handle))
            .layer(Extension(make_session(viewer)))
            .with_state(make_test_state(Arc::new(backend)))
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_empty_feed() {
        let response = app(InMemoryBackend::default(), "A")
            .oneshot(Request::get("/feed").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_attributed_entries_with_both_times() {
        let backend = InMemoryBackend::default();
        backend.seed_user(User::new("A", Some("Ann"))).await;
        backend
            .seed_entry(
                EntryBuilder::new()
                    .id(7)
                    .author_id("A")
                    .date("2024/07/15")
                    .source_time("15:30")
                    .build(),
            )
            .await;

        let response = app(backend, "A")
            .oneshot(Request::get("/feed").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["author_nickname"], "Ann");
        assert_eq!(json[0]["is_owner"], true);
        assert_eq!(json[0]["source_time"], "15:30");
        assert_eq!(json[0]["target_time"], "08:30");
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_entries_table_is_offline() {
        let mut backend = InMemoryBackend::default();
        backend.toggle_offline();

        let response = app(backend, "A")
            .oneshot(Request::get("/feed").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
