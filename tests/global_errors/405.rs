//! tests/global_errors/405.rs
//! /ping only answers GET; other methods are rejected by the router.

use ping_demo_api::AppState;
use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_405_for_post_to_ping() {
    let base_url: String = common::spawn_app(AppState::default());

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/ping", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
