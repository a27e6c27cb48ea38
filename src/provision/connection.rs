//! Database connection pool management.
//!
//! Uses `sqlx::PgPool` with explicit limits: a ceiling on open connections
//! (which also bounds idle ones), and a maximum connection lifetime so stale
//! connections are recycled instead of failing mid-request.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::ProvisionError;
use crate::config::DatabaseConfig;

/// Builds driver connect options from the config.
fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, ProvisionError> {
    match &config.url {
        Some(url) => Ok(url.parse::<PgConnectOptions>()?),
        None => Ok(PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)),
    }
}

/// Builds the pool without opening any connection yet.
fn open(config: &DatabaseConfig) -> Result<PgPool, ProvisionError> {
    let options = connect_options(config)?;
    tracing::info!(url = %config.redacted_url(), "opening database pool");

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.max_lifetime)
        .connect_lazy_with(options))
}

async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Opens a pooled handle and verifies it with a single ping.
///
/// This is the one-shot entry point for callers that want an immediate
/// answer, such as tooling that checks a `DATABASE_URL` before doing work.
/// The service itself starts through [`establish`], which tolerates a
/// database that is still booting. The pool is closed again if the ping
/// fails, so no half-open handle escapes.
///
/// # Errors
///
/// Returns [`ProvisionError::Connect`] if the connection options are invalid
/// or the database does not answer.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, ProvisionError> {
    let pool = open(config)?;
    if let Err(err) = ping(&pool).await {
        tracing::warn!(error = %err, "database ping failed");
        pool.close().await;
        return Err(err.into());
    }
    tracing::info!("database connection and ping successful");
    Ok(pool)
}

/// Pings the database up to `max_retries` times, sleeping `delay` between
/// attempts.
///
/// # Errors
///
/// Returns [`ProvisionError::NotReady`] once every attempt has failed.
pub async fn wait_for_database(
    pool: &PgPool,
    max_retries: u32,
    delay: Duration,
) -> Result<(), ProvisionError> {
    for attempt in 1..=max_retries {
        match ping(pool).await {
            Ok(()) => {
                tracing::info!(attempt, "database connection established");
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(attempt, max_retries, error = %err, "waiting for database");
            }
        }
        if attempt < max_retries {
            tokio::time::sleep(delay).await;
        }
    }
    Err(ProvisionError::NotReady {
        attempts: max_retries,
    })
}

/// Produces a pool that has answered a ping.
///
/// Runs the readiness loop with `ready_retries`; if that fails, drops the
/// pool, builds a fresh one and waits again with `redial_retries`. A second
/// failure is terminal.
///
/// # Errors
///
/// Returns the error of the reconnect cycle when both cycles fail.
pub async fn establish(config: &DatabaseConfig) -> Result<PgPool, ProvisionError> {
    let pool = open(config)?;
    match wait_for_database(&pool, config.ready_retries, config.retry_delay).await {
        Ok(()) => return Ok(pool),
        Err(err) => {
            tracing::warn!(error = %err, "database not ready, attempting to reconnect");
            pool.close().await;
        }
    }

    let pool = open(config)?;
    if let Err(err) = wait_for_database(&pool, config.redial_retries, config.retry_delay).await {
        pool.close().await;
        return Err(err);
    }
    Ok(pool)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    /// Points at a port nobody listens on so every ping is refused quickly.
    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            user: "nobody".to_string(),
            password: "nothing".to_string(),
            host: "127.0.0.1".to_string(),
            port: 1,
            name: "missing".to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_millis(200),
            max_lifetime: Duration::from_secs(300),
            ready_retries: 2,
            redial_retries: 1,
            retry_delay: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn readiness_loop_gives_up_after_max_retries() {
        let Ok(pool) = open(&unreachable_config()) else {
            panic!("lazy pool construction failed");
        };
        let result = wait_for_database(&pool, 3, Duration::from_millis(5)).await;
        assert!(matches!(result, Err(ProvisionError::NotReady { attempts: 3 })));
    }

    #[tokio::test]
    async fn zero_retries_fails_immediately() {
        let Ok(pool) = open(&unreachable_config()) else {
            panic!("lazy pool construction failed");
        };
        let result = wait_for_database(&pool, 0, Duration::from_secs(60)).await;
        assert!(matches!(result, Err(ProvisionError::NotReady { attempts: 0 })));
    }

    #[tokio::test]
    async fn connect_reports_unreachable_database() {
        let result = connect(&unreachable_config()).await;
        assert!(matches!(result, Err(ProvisionError::Connect(_))));
    }

    #[tokio::test]
    async fn establish_fails_after_reconnect_cycle() {
        let result = establish(&unreachable_config()).await;
        assert!(matches!(result, Err(ProvisionError::NotReady { attempts: 1 })));
    }

    #[tokio::test]
    async fn malformed_url_is_a_connect_error() {
        let config = DatabaseConfig {
            url: Some("definitely not a url".to_string()),
            ..unreachable_config()
        };
        assert!(matches!(connect(&config).await, Err(ProvisionError::Connect(_))));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn establishes_against_live_database() {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            panic!("DATABASE_URL required");
        };
        let config = DatabaseConfig {
            url: Some(url),
            ..unreachable_config()
        };
        let Ok(pool) = establish(&config).await else {
            panic!("live database unreachable");
        };
        assert!(ping(&pool).await.is_ok());
    }
}
