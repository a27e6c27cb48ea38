//! HTTP listener lifecycle: serve until a shutdown signal, then drain
//! in-flight requests for a bounded grace period.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Listener or connection I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The serve task panicked or was cancelled.
    #[error("server task failed: {0}")]
    Task(#[from] JoinError),
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// After the signal, new connections are refused and in-flight requests get
/// `grace` to finish. Whatever is still running after that is aborted.
///
/// # Errors
///
/// Returns a [`ServerError`] if the server fails before or during shutdown.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => return Ok(joined??),
        () = shutdown => {}
    }

    tracing::info!(grace_secs = grace.as_secs_f64(), "draining in-flight requests");
    let _ = drain_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("server shutdown complete");
        }
        Err(_) => {
            tracing::warn!("grace period elapsed, closing remaining connections");
            server.abort();
        }
    }
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the error is logged and that source is
/// ignored.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}
