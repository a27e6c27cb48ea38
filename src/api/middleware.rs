//! Request interceptors wrapped around the router.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Logs method and path+query of every request before passing it on.
pub async fn log_request(req: Request, next: Next) -> Response {
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str());
    tracing::info!(method = %req.method(), uri, "request received");
    next.run(req).await
}

/// Short-circuits with 401 unless the configured validator accepts the
/// `Authorization` header.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] on missing or wrong credentials.
pub async fn require_credentials(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !state.validator.validate(header) {
        tracing::warn!(path = req.uri().path(), "rejected unauthenticated request");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}
