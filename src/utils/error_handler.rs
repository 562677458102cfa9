// Request-level failure type and the adapters that funnel every kind of
// pipeline failure into it

use std::any::Any;
use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::services::PingError;

/// The single failure kind of the request pipeline: an operation failed with a message.
///
/// Handlers return it as the `Err` side of their result. Rendering it stores a copy
/// in the response extensions so `error_translation` can pick it up and produce
/// the client-facing response. Left untranslated it renders as a 500.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    message: String,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<PingError> for AppError {
    fn from(err: PingError) -> Self {
        Self::new(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response: Response =
            (StatusCode::INTERNAL_SERVER_ERROR, self.message.clone()).into_response();

        // Picked up by the error translation middleware
        response.extensions_mut().insert(self);
        response
    }
}

/// Converts failures raised by tower layers (timeouts and the like) into an [`AppError`]
pub async fn handle_global_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        warn!("Request exceeded the configured timeout");
    } else {
        error!("Unhandled layer error: {err}");
    }

    AppError::new(err.to_string())
}

/// Converts a handler panic into an [`AppError`] response, keeping the panic message
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message: String = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    error!("Handler panicked: {message}");

    AppError::new(message).into_response()
}
