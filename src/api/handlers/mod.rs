//! REST endpoint handlers organized by resource.

pub mod books;
pub mod system;
