//! Public probe endpoints: `/` for humans and load balancers, `/health` for
//! monitoring that wants something machine-readable.
//!
//! Neither touches the record store, so they answer even while the database
//! is unreachable.

use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Plain-text body served at `/`.
pub const BANNER: &str = "Welcome to the bookshelf!";

/// Body of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` whenever the process is serving requests.
    pub status: &'static str,
    /// Package name of the running binary.
    pub service: &'static str,
    /// Package version of the running binary.
    pub version: &'static str,
    /// Server clock at the time of the probe.
    pub timestamp: DateTime<Utc>,
}

/// `GET /`: Liveness banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Liveness banner",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain"),
    )
)]
pub async fn root_handler() -> &'static str {
    BANNER
}

/// `GET /health`: Build identity and server clock.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Identifies the running build and reports the server clock. Needs no credentials.",
    responses(
        (status = 200, description = "Process is serving", body = HealthResponse),
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// Public routes; no credentials required.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use super::BANNER;
    use crate::api::test_support::{FailingStore, app_with, send};

    #[tokio::test]
    async fn banner_is_plain_text() {
        let app = app_with(Arc::new(FailingStore));
        let reply = send(&app, Method::GET, "/", None, None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body.as_ref(), BANNER.as_bytes());
        let content_type = reply.headers.get("content-type").and_then(|v| v.to_str().ok());
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/plain")));
    }

    #[tokio::test]
    async fn health_answers_while_the_store_is_down() {
        let app = app_with(Arc::new(FailingStore));
        let reply = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(reply.status, StatusCode::OK);
        let body = reply.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "bookshelf");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        let Some(stamp) = body["timestamp"].as_str() else {
            panic!("timestamp missing: {body}");
        };
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
