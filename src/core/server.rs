// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::ping::ping_routes;
use crate::utils::{
    error_handler::{handle_global_error, handle_panic},
    response_handler::error_translation,
};

/// Creates the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let timeout: Duration = Duration::from_secs(state.environment.default_timeout_seconds);

    let routes: Router<AppState> = Router::new()
        .merge(ping_routes());
        // Add new routes here

    apply_middleware(routes, timeout).with_state(state)
}

/// Wraps a router in the request pipeline, outermost first:
/// tracing, error translation, layer-error handling, timeout, panic catching.
pub fn apply_middleware<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(error_translation))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(timeout))
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Binds the listener and serves until a shutdown signal arrives
pub async fn run(state: AppState) -> Result<()> {
    let listener: TcpListener = setup_listener(&state.environment).await?;
    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install terminate signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
