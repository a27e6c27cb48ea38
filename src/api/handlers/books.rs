//! Book CRUD handlers: list, get, create, update, delete.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{BookListResponse, BookResponse, ListParams, MessageResponse};
use crate::api::extract::{BookPath, JsonBody};
use crate::app_state::AppState;
use crate::domain::BookDraft;
use crate::error::{ApiError, ErrorResponse};

/// `GET /books`: List books one page at a time.
///
/// # Errors
///
/// Returns [`ApiError::Store`] if the store query fails.
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    summary = "List books",
    description = "Returns one page of books. Missing, non-numeric or non-positive `page`/`limit` values fall back to 1 and 10; a repeated key keeps its first value. An empty page is still a 200.",
    params(ListParams),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Page of books", body = BookListResponse),
        (status = 401, description = "Missing or wrong credentials", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<impl IntoResponse, ApiError> {
    let page = params.resolve();
    let data = state.store.list(page.limit, page.offset()).await?;

    Ok(Json(BookListResponse {
        data,
        page: page.page,
        limit: page.limit,
    }))
}

/// `GET /books/{id}`: Fetch one book.
///
/// # Errors
///
/// Returns [`ApiError::InvalidId`] for a malformed id and
/// [`ApiError::BookNotFound`] if no book has it.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "Books",
    summary = "Get a book",
    params(
        ("id" = String, Path, description = "Book UUID"),
    ),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The book", body = BookResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
) -> Result<impl IntoResponse, ApiError> {
    let book = state.store.get(id).await?;
    Ok(Json(BookResponse { book }))
}

/// `POST /books`: Create a book.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for a malformed body or missing
/// required field, [`ApiError::Duplicate`] on a uniqueness violation.
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    summary = "Create a book",
    description = "Stores a new book under a server-generated UUID, returned as `id` in the response. `title` and `author` are required.",
    request_body = BookDraft,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 400, description = "Invalid payload, missing field, or duplicate", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials", body = ErrorResponse),
        (status = 413, description = "Body too large", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<BookDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    let id = state.store.create(draft).await?;
    tracing::info!(%id, "book created");

    Ok(Json(MessageResponse {
        message: "Book created".to_string(),
        id: Some(id),
    }))
}

/// `PUT /books/{id}`: Replace every mutable field of a book.
///
/// # Errors
///
/// Returns [`ApiError::InvalidId`], [`ApiError::InvalidRequest`], or
/// [`ApiError::BookNotFound`].
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "Books",
    summary = "Replace a book",
    description = "Overwrites title, author, published_year and genre. Omitted optional fields are cleared.",
    params(
        ("id" = String, Path, description = "Book UUID"),
    ),
    request_body = BookDraft,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Malformed id or payload", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
    JsonBody(draft): JsonBody<BookDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate()?;
    state.store.update(id, draft).await?;
    Ok(Json(MessageResponse::new("Book updated")))
}

/// `DELETE /books/{id}`: Remove a book.
///
/// # Errors
///
/// Returns [`ApiError::InvalidId`] or [`ApiError::BookNotFound`].
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "Books",
    summary = "Delete a book",
    params(
        ("id" = String, Path, description = "Book UUID"),
    ),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookPath(id): BookPath,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(%id, "book deleted");
    Ok(Json(MessageResponse::new("Book deleted")))
}

/// Book resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
