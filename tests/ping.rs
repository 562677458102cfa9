//! tests/ping.rs
//! End-to-end behaviour of GET /ping against a live server.

mod common;

use ping_demo_api::{AppState, ServiceScope};
use reqwest::StatusCode;

async fn get_ping(base_url: &str) -> (StatusCode, String) {
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/ping", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    let status: StatusCode = resp.status();
    let body: String = resp.text().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn ping_on_success_returns_ok_with_pong() {
    let base_url: String = common::spawn_app(AppState::default());

    let (status, body) = get_ping(&base_url).await;

    assert!(status.is_success());
    assert_eq!(body, "Pong!");
}

#[tokio::test]
async fn ping_on_error_returns_bad_request_with_message() {
    let state: AppState = AppState::default();
    let base_url: String = common::spawn_app(state.clone());

    state
        .ping_service()
        .shared()
        .configure_failure("Something went wrong!");

    let (status, body) = get_ping(&base_url).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Something went wrong!");
}

#[tokio::test]
async fn repeated_pings_return_the_same_response() {
    let base_url: String = common::spawn_app(AppState::default());

    let first = get_ping(&base_url).await;
    let second = get_ping(&base_url).await;

    assert_eq!(first, second);
    assert_eq!(first, (StatusCode::OK, "Pong!".to_string()));
}

#[tokio::test]
async fn empty_failure_message_gives_empty_bad_request() {
    let state: AppState = AppState::default();
    state.ping_service().shared().configure_failure("");
    let base_url: String = common::spawn_app(state);

    let (status, body) = get_ping(&base_url).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "");
}

#[tokio::test]
async fn responses_are_plain_text() {
    let state: AppState = AppState::default();
    let base_url: String = common::spawn_app(state.clone());

    let ok: reqwest::Response = reqwest::get(format!("{}/ping", base_url)).await.unwrap();
    assert_eq!(ok.headers()["content-type"], "text/plain; charset=utf-8");

    state.ping_service().shared().configure_failure("broken");

    let failed: reqwest::Response = reqwest::get(format!("{}/ping", base_url)).await.unwrap();
    assert_eq!(failed.headers()["content-type"], "text/plain; charset=utf-8");
}

#[tokio::test]
async fn configured_failure_persists_with_shared_scope() {
    let state: AppState = common::state_with_scope(ServiceScope::Shared);
    state.ping_service().shared().configure_failure("still broken");
    let base_url: String = common::spawn_app(state);

    for _ in 0..2 {
        assert_eq!(
            get_ping(&base_url).await,
            (StatusCode::BAD_REQUEST, "still broken".to_string())
        );
    }
}

#[tokio::test]
async fn configured_failure_does_not_leak_with_per_request_scope() {
    let state: AppState = common::state_with_scope(ServiceScope::PerRequest);
    state.ping_service().shared().configure_failure("should not be seen");
    let base_url: String = common::spawn_app(state);

    assert_eq!(
        get_ping(&base_url).await,
        (StatusCode::OK, "Pong!".to_string())
    );
}
