//! # bookshelf
//!
//! REST API for a single "book" resource stored in PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Middleware: trace, request log, body limit,
//!     │   JSON content type, bearer auth (api/middleware)
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookStore trait (store/)
//!     │     ├── PgBookStore ── PostgreSQL
//!     │     └── MemoryBookStore
//!     │
//!     └── Provisioning: pool, readiness loop, migrations (provision/)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod provision;
pub mod server;
pub mod store;
