//! Router tests exercising every facade route against the memory adapter.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use super::fixtures::{CHANNEL_ID, GUILD_ID, connected_gateway, message};
use crate::facade::adapters::memory::InMemoryChatGateway;
use crate::facade::routes::{AppState, router};

fn app(gateway: InMemoryChatGateway) -> Router {
    router(AppState::new(Arc::new(gateway)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should be served");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, value)
}

async fn post_json(app: Router, uri: &str, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .expect("request should build"),
        )
        .await
        .expect("request should be served");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, value)
}

#[rstest]
#[tokio::test]
async fn health_reports_null_bot_before_connection() {
    let (status, body) = get_json(app(InMemoryChatGateway::new()), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "bot": null }));
}

#[rstest]
#[tokio::test]
async fn health_reports_bot_identity_once_connected() {
    let (status, body) = get_json(app(connected_gateway()), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bot"]["username"], "herald");
    assert_eq!(body["bot"]["guilds"], 1);
}

#[rstest]
#[tokio::test]
async fn guilds_require_a_connected_bot() {
    let (status, body) = get_json(app(InMemoryChatGateway::new()), "/api/guilds").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Bot not ready" }));
}

#[rstest]
#[tokio::test]
async fn guilds_list_uses_camel_case_member_count() {
    let (status, body) = get_json(app(connected_gateway()), "/api/guilds").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], GUILD_ID);
    assert_eq!(body[0]["memberCount"], 7);
}

#[rstest]
#[tokio::test]
async fn channels_for_unknown_guild_are_not_found() {
    let (status, body) = get_json(
        app(connected_gateway()),
        "/api/guilds/999999999/channels",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Guild not found" }));
}

#[rstest]
#[tokio::test]
async fn channels_are_listed_with_type_and_position() {
    let (status, body) = get_json(
        app(connected_gateway()),
        &format!("/api/guilds/{GUILD_ID}/channels"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "general");
    assert_eq!(body[0]["type"], 0);
    assert_eq!(body[1]["position"], 1);
}

#[rstest]
#[tokio::test]
async fn messages_for_unknown_channel_are_not_found() {
    let (status, body) = get_json(
        app(connected_gateway()),
        "/api/channels/999999999/messages",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Channel not found" }));
}

#[rstest]
#[tokio::test]
async fn messages_respect_limit_and_stay_chronological() {
    let gateway = connected_gateway().with_messages(
        CHANNEL_ID,
        vec![message(1, "first"), message(2, "second"), message(3, "third")],
    );
    let (status, body) = get_json(
        app(gateway),
        &format!("/api/channels/{CHANNEL_ID}/messages?limit=2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["content"], "second");
    assert_eq!(body[1]["content"], "third");
}

#[rstest]
#[case::non_numeric("abc")]
#[case::out_of_range("300")]
#[case::negative("-1")]
#[tokio::test]
async fn unusable_limits_get_the_json_error_body(#[case] limit: &str) {
    let (status, body) = get_json(
        app(connected_gateway()),
        &format!("/api/channels/{CHANNEL_ID}/messages?limit={limit}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid limit" }));
}

#[rstest]
#[tokio::test]
async fn posting_without_a_body_requires_content() {
    let (status, body) = post_json(
        app(connected_gateway()),
        &format!("/api/channels/{CHANNEL_ID}/messages"),
        Body::empty(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Content required" }));
}

#[rstest]
#[tokio::test]
async fn posting_empty_content_requires_content() {
    let (status, body) = post_json(
        app(connected_gateway()),
        &format!("/api/channels/{CHANNEL_ID}/messages"),
        Body::from(r#"{"content":""}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Content required" }));
}

#[rstest]
#[tokio::test]
async fn posting_content_echoes_the_created_message() {
    let (status, body) = post_json(
        app(connected_gateway()),
        &format!("/api/channels/{CHANNEL_ID}/messages"),
        Body::from(r#"{"content":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "hi");
    assert_eq!(body["author"]["bot"], true);
}

#[rstest]
#[tokio::test]
async fn library_failure_maps_to_internal_error() {
    let gateway = connected_gateway().with_failing_channel("300");
    let (status, body) = post_json(
        app(gateway),
        "/api/channels/300/messages",
        Body::from(r#"{"content":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "platform call refused" }));
}
