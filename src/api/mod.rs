//! REST API layer: route handlers, DTOs, middleware, and router composition.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;

#[cfg(test)]
mod test_support;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::CONTENT_TYPE;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Default request body ceiling: 1 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Builds the complete application router.
///
/// Outermost first, every request passes through CORS, tracing, request
/// logging, and the body-size ceiling. `/books` routes additionally get a forced
/// `Content-Type: application/json` and the credential check; `/`,
/// `/health`, and the API docs stay public.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let books = handlers::books::routes()
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_credentials,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

    let router = Router::new()
        .merge(handlers::system::routes())
        .merge(books);

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
