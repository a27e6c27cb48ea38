//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BookStore, StoreError};
use crate::domain::{Book, BookDraft, BookId};

/// Raw `books` row as returned by `sqlx`.
type BookRow = (BookId, String, String, Option<i32>, Option<String>);

fn book_from_row((id, title, author, published_year, genre): BookRow) -> Book {
    Book {
        id,
        title,
        author,
        published_year,
        genre,
    }
}

/// PostgreSQL-backed record store using `sqlx::PgPool`.
///
/// The pool is provisioned (connected, checked for readiness and migrated)
/// by [`crate::provision`] before it is handed to the store.
#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, published_year, genre FROM books \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(book_from_row).collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, published_year, genre FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(book_from_row).ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, draft: BookDraft) -> Result<BookId, StoreError> {
        let id = BookId::generate();
        sqlx::query(
            "INSERT INTO books (id, title, author, published_year, genre) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.published_year)
        .bind(&draft.genre)
        .execute(&self.pool)
        .await?;

        tracing::info!(%id, "book inserted");
        Ok(id)
    }

    async fn update(&self, id: BookId, draft: BookDraft) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author = $2, published_year = $3, genre = $4 \
             WHERE id = $5",
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.published_year)
        .bind(&draft.genre)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(%id, "book updated");
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(%id, "book deleted");
        Ok(())
    }
}
