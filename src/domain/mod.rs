//! Domain layer: the book entity and its identifier.
//!
//! This module holds the server-side model shared by the record store and
//! the REST handlers. It has no knowledge of HTTP; the only database
//! concern is that [`BookId`] maps straight onto the `UUID` column.

pub mod book;
pub mod book_id;

pub use book::{Book, BookDraft};
pub use book_id::{BookId, InvalidBookId};
