//! Data Transfer Objects for REST request/response serialization.

pub mod book_dto;
pub mod common_dto;

pub use book_dto::*;
pub use common_dto::*;
