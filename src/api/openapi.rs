//! OpenAPI document for the REST surface.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::dto::{BookListResponse, BookResponse, MessageResponse};
use super::handlers::{books, system};
use crate::domain::{Book, BookDraft, BookId};
use crate::error::ErrorResponse;

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "bookshelf", description = "CRUD API for a book catalog"),
    paths(
        system::root_handler,
        system::health_handler,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(schemas(
        Book,
        BookDraft,
        BookId,
        BookResponse,
        BookListResponse,
        MessageResponse,
        ErrorResponse,
        system::HealthResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Books", description = "Book catalog"),
        (name = "System", description = "Liveness and health"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
