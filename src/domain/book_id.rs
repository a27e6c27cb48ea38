//! Book identifiers as they appear in URLs and in the `books.id` column.
//!
//! A [`BookId`] is minted by the record store when a book is created and is
//! the only way a client addresses it afterwards, so parsing one out of a
//! path segment has its own error type carrying the rejected literal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Primary key of a book.
///
/// Encoded to and decoded from the Postgres `UUID` column directly, and
/// serialized to JSON as the canonical hyphenated lowercase string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BookId(uuid::Uuid);

impl BookId {
    /// Mints a fresh random (v4) identifier for a new book.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// A path segment that is not a UUID literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid book id: {literal}")]
pub struct InvalidBookId {
    /// The rejected input, verbatim.
    pub literal: String,
}

impl FromStr for BookId {
    type Err = InvalidBookId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidBookId {
                literal: s.to_string(),
            })
    }
}
