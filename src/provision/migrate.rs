//! Embedded schema migrations.
//!
//! Versions are tracked by `sqlx` in its own `_sqlx_migrations` table, so
//! re-running at every start only applies what is new.

use sqlx::PgPool;
use sqlx::migrate::Migrator;

use super::ProvisionError;

/// Migration set compiled in from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies all pending migrations.
///
/// # Errors
///
/// Returns [`ProvisionError::Migrate`] if any migration fails or the applied
/// history diverges from the embedded set.
pub async fn run_migrations(pool: &PgPool) -> Result<(), ProvisionError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(count = MIGRATOR.iter().count(), "migrations up to date");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn books_migration_is_embedded() {
        assert!(MIGRATOR.iter().any(|m| m.description == "create books"));
    }

    #[test]
    fn versions_are_strictly_increasing() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rerun_skips_applied_versions() {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            panic!("DATABASE_URL required");
        };
        let Ok(pool) = PgPool::connect(&url).await else {
            panic!("connection failed");
        };
        for pass in 1..=2 {
            if let Err(err) = run_migrations(&pool).await {
                panic!("pass {pass} failed: {err}");
            }
        }

        for migration in MIGRATOR.iter() {
            let recorded = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE version = $1 AND success",
            )
            .bind(migration.version)
            .fetch_one(&pool)
            .await;
            let Ok(recorded) = recorded else {
                panic!("bookkeeping table unreadable");
            };
            assert_eq!(recorded, 1, "version {}", migration.version);
        }
    }
}
