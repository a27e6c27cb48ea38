//! Schema and connection provisioning.
//!
//! Everything needed to hand the record store a live, migrated `PgPool`:
//! pool construction with limits, the readiness loop, the single reconnect
//! cycle, and the embedded migration set. The store itself never calls into
//! this module.

pub mod connection;
pub mod migrate;

pub use connection::{connect, establish, wait_for_database};
pub use migrate::run_migrations;

/// Failure while provisioning the database.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Opening or pinging the database failed.
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    /// The readiness loop exhausted its attempts.
    #[error("database not ready after {attempts} attempts")]
    NotReady {
        /// Number of pings attempted.
        attempts: u32,
    },

    /// Applying a migration failed.
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
