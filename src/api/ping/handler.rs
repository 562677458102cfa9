// Ping endpoint handler

use std::sync::Arc;
use axum::{extract::State, http::StatusCode};
use tracing::{info, instrument};

use crate::services::{PingService, PingServiceProvider};
use crate::utils::error_handler::AppError;

/// Answers `GET /ping` with the service's payload.
///
/// Failures are not handled here; they are returned to the error translation middleware.
#[instrument(skip(services), fields(scope = %services.scope()))]
pub async fn ping_handler(
    State(services): State<PingServiceProvider>,
) -> Result<(StatusCode, &'static str), AppError> {
    let service: Arc<PingService> = services.resolve();
    let pong: &'static str = service.ping()?;

    info!("Ping answered");
    Ok((StatusCode::OK, pong))
}
