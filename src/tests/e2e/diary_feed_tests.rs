use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn app() -> Router {
    let backend = InMemoryBackend::default();
    backend.register_account("ann@local.com", "secret", None).await;
    backend.register_account("bob@local.com", "pw", Some("Bobby")).await;
    router(make_test_state(Arc::new(backend)))
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn sign_in(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        Request::post("/sign-in")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

fn authorized(builder: axum::http::request::Builder, token: &str) -> axum::http::request::Builder {
    builder.header("authorization", format!("Bearer {token}"))
}

async fn feed(app: &Router, token: &str) -> Value {
    let response = send(
        app,
        authorized(Request::get("/feed"), token)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn publishes_lists_and_hides_entries_across_users() {
    let app = app().await;
    let ann = sign_in(&app, "ann", "secret").await;
    let bob = sign_in(&app, "bob", "pw").await;

    for content in ["first", "second"] {
        let response = send(
            &app,
            authorized(Request::post("/entries"), &ann)
                .header("content-type", "application/json")
                .body(Body::from(json!({ "content": content }).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let seen_by_bob = feed(&app, &bob).await;
    let items = seen_by_bob.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["content"], "second");
    assert_eq!(items[1]["content"], "first");
    // Ann never set a nickname, so sign-in gave her the username.
    assert_eq!(items[0]["author_nickname"], "ann");
    assert_eq!(items[0]["is_owner"], false);
    assert!(items[0]["target_time"].is_string());
    let newest_id = items[0]["id"].as_i64().unwrap();

    let response = send(
        &app,
        authorized(Request::post(format!("/entries/{newest_id}/hide")), &bob)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(feed(&app, &bob).await.as_array().unwrap().len(), 2);

    let response = send(
        &app,
        authorized(Request::post(format!("/entries/{newest_id}/hide")), &ann)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let seen_by_ann = feed(&app, &ann).await;
    let items = seen_by_ann.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["content"], "first");
    assert_eq!(items[0]["is_owner"], true);
}

#[tokio::test]
async fn renames_the_author_everywhere_in_the_feed() {
    let app = app().await;
    let bob = sign_in(&app, "bob", "pw").await;

    let response = send(
        &app,
        authorized(Request::post("/entries"), &bob)
            .header("content-type", "application/json")
            .body(Body::from(json!({ "content": "hi" }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(feed(&app, &bob).await[0]["author_nickname"], "Bobby");

    let response = send(
        &app,
        authorized(Request::put("/nickname"), &bob)
            .header("content-type", "application/json")
            .body(Body::from(json!({ "nickname": "Robert" }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(feed(&app, &bob).await[0]["author_nickname"], "Robert");
}

#[tokio::test]
async fn attaches_images_and_publishes_them_with_the_entry() {
    let app = app().await;
    let ann = sign_in(&app, "ann", "secret").await;

    let response = send(
        &app,
        authorized(Request::post("/images?name=cat.png"), &ann)
            .body(Body::from(&b"png bytes"[..]))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let urls = body_json(response).await["image_urls"].clone();

    let response = send(
        &app,
        authorized(Request::post("/entries"), &ann)
            .header("content-type", "application/json")
            .body(Body::from(json!({ "image_urls": urls }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let items = feed(&app, &ann).await;
    assert_eq!(items[0]["content"], "");
    assert_eq!(items[0]["image_urls"], urls);
}

#[tokio::test]
async fn serves_the_feed_over_graphql() {
    let app = app().await;
    let ann = sign_in(&app, "ann", "secret").await;

    let publish = json!({
        "query": "mutation { publishEntry(content: \"from graphql\") }"
    });
    let response = send(
        &app,
        authorized(Request::post("/gql"), &ann)
            .header("content-type", "application/json")
            .body(Body::from(publish.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let published = body_json(response).await;
    assert!(published["errors"].is_null(), "{published}");

    let query = json!({ "query": "{ feed { content authorNickname isOwner targetTime } }" });
    let response = send(
        &app,
        authorized(Request::post("/gql"), &ann)
            .header("content-type", "application/json")
            .body(Body::from(query.to_string()))
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["feed"][0]["content"], "from graphql");
    assert_eq!(body["data"]["feed"][0]["authorNickname"], "ann");
    assert_eq!(body["data"]["feed"][0]["isOwner"], true);
}

#[tokio::test]
async fn rejects_graphql_feed_reads_without_a_session() {
    let app = app().await;

    let query = json!({ "query": "{ feed { content } }" });
    let response = send(
        &app,
        Request::post("/gql")
            .header("content-type", "application/json")
            .body(Body::from(query.to_string()))
            .unwrap(),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["message"], "authentication required");
    assert_eq!(body["errors"][0]["extensions"]["status"], "401");
}
