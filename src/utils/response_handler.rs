// Error translation middleware
// Turns any failure that surfaced downstream into a 400 with the failure's message

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use std::convert::Infallible;
use tracing::{debug, warn};

use crate::utils::error_handler::AppError;

/// Builds the client-facing response for a failure: 400 and the message as plain text
fn bad_request(err: AppError) -> Response<Body> {
    (StatusCode::BAD_REQUEST, err.into_message()).into_response()
}

/// Middleware wrapping the whole pipeline.
///
/// Successful responses pass through untouched. A response carrying an [`AppError`]
/// (returned by a handler, produced from a layer error or from a caught panic)
/// is replaced by a 400 whose body is the error message.
pub async fn error_translation(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    let failure: Option<AppError> = response.extensions().get::<AppError>().cloned();

    match failure {
        None => {
            debug!("Request completed with status {}", response.status());
            Ok(response)
        }
        Some(err) => {
            warn!("Translating failure into 400: {:?}", err.message());
            Ok(bad_request(err))
        }
    }
}
