//! The book entity and the client-supplied draft used to create or replace it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BookId;
use crate::error::ApiError;

/// A stored book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-generated identifier (immutable after creation).
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Year of first publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    /// Free-form genre label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Book {
    /// Materializes a draft into a row under the given identifier.
    #[must_use]
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            published_year: draft.published_year,
            genre: draft.genre,
        }
    }
}

/// Request body for `POST /books` and `PUT /books/{id}`.
///
/// Carries every mutable field. An `id` in the payload is ignored: identifiers
/// are only ever assigned by the record store. On update the draft replaces
/// the stored row wholesale, so omitted optional fields are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDraft {
    /// Required, must contain a non-whitespace character.
    #[serde(default)]
    pub title: String,
    /// Required, must contain a non-whitespace character.
    #[serde(default)]
    pub author: String,
    /// Optional year of first publication.
    #[serde(default)]
    pub published_year: Option<i32>,
    /// Optional genre label.
    #[serde(default)]
    pub genre: Option<String>,
}

impl BookDraft {
    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] naming the first missing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::InvalidRequest("title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(ApiError::InvalidRequest("author is required".to_string()));
        }
        Ok(())
    }
}
