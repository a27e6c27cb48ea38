//! Book response envelopes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Book;

/// Single book envelope for `GET /books/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    /// The requested book.
    pub book: Book,
}

/// Page of books for `GET /books`.
///
/// Carries the requested window only; no total count is computed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    /// Books on this page, possibly empty.
    pub data: Vec<Book>,
    /// Page number the window was computed from.
    pub page: u32,
    /// Page size the window was computed from.
    pub limit: u32,
}
