//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use ping_demo_api::{create_app, AppState, EnvironmentVariables, ServiceScope};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app on a random unused port and returns its base URL.
///
/// The caller keeps `state`; it shares the ping service with the running app,
/// so failures configured on it after spawning are seen by the server.
pub fn spawn_app(state: AppState) -> String {
    // * Build the application exactly as main() does.
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// Fresh state with the ping service in the given scope.
pub fn state_with_scope(scope: ServiceScope) -> AppState {
    AppState::new(EnvironmentVariables {
        ping_service_scope: scope,
        ..EnvironmentVariables::default()
    })
}
