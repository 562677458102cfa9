//! tests/global_errors/404.rs
//! Unknown routes are not failures: they keep the framework's 404.

use ping_demo_api::AppState;
use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let state: AppState = AppState::default();
    // A configured failure must not turn routing misses into 400s.
    state.ping_service().shared().configure_failure("Something went wrong!");
    let base_url: String = common::spawn_app(state);

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
