//! In-process record store.
//!
//! [`MemoryBookStore`] keeps rows in insertion order behind a
//! [`tokio::sync::RwLock`]. Reads proceed concurrently; writes are
//! serialized. It backs the handler tests and `STORE_BACKEND=memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, StoreError};
use crate::domain::{Book, BookDraft, BookId};

/// Book collection held in memory.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully formed row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if a row with the same identifier
    /// already exists.
    pub async fn insert(&self, book: Book) -> Result<BookId, StoreError> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id == book.id) {
            return Err(StoreError::Duplicate);
        }
        let id = book.id;
        books.push(book);
        Ok(id)
    }

    /// Returns the number of stored rows.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Returns `true` if the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<Book>, StoreError> {
        let books = self.books.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(books.iter().skip(skip).take(take).cloned().collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        let books = self.books.read().await;
        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, draft: BookDraft) -> Result<BookId, StoreError> {
        let id = self.insert(Book::from_draft(BookId::generate(), draft)).await?;
        tracing::debug!(%id, "book inserted");
        Ok(id)
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<(), StoreError> {
        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = Book::from_draft(id, draft);
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), StoreError> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
