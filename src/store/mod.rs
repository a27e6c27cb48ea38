//! Record store: parameterized CRUD against the `books` table.
//!
//! Handlers depend only on the [`BookStore`] trait. [`PgBookStore`] is the
//! production implementation over `sqlx::PgPool`; [`MemoryBookStore`] keeps
//! rows in process for tests and local runs without a database.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Book, BookDraft, BookId};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Outcome of a failed store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Zero rows matched the identifier.
    #[error("book {0} not found")]
    NotFound(BookId),

    /// Insert violated a uniqueness constraint.
    #[error("duplicate book")]
    Duplicate,

    /// Any other backend failure. The message is for logs only.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            return Self::Duplicate;
        }
        Self::Backend(err.to_string())
    }
}

/// CRUD operations over the book collection.
///
/// Calls are cancelled by dropping the returned future; axum does this when
/// the client disconnects mid-request.
#[async_trait]
pub trait BookStore: Send + Sync + std::fmt::Debug {
    /// Returns at most `limit` books starting at `offset`, in the store's
    /// natural order. An empty page is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on backend failure.
    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<Book>, StoreError>;

    /// Fetches a single book.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no row has this identifier.
    async fn get(&self, id: BookId) -> Result<Book, StoreError>;

    /// Inserts a new row under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] on a uniqueness violation.
    async fn create(&self, draft: BookDraft) -> Result<BookId, StoreError>;

    /// Replaces every mutable field of the row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when zero rows were affected.
    async fn update(&self, id: BookId, draft: BookDraft) -> Result<(), StoreError>;

    /// Removes the row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when zero rows were affected.
    async fn delete(&self, id: BookId) -> Result<(), StoreError>;
}
