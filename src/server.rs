//! HTTP server initialization and runtime setup.
//!
//! Builds the single in-memory store, binds one listener per configured
//! worker and serves the same router on all of them until shutdown.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// Runs the HTTP server with the given configuration.
///
/// Every listener shares one [`AppState`], so a record created through one
/// port is visible through all of them.
///
/// # Errors
///
/// Returns an error if:
/// - A listener fails to bind
/// - A listener fails while serving
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::in_memory();
    tracing::info!("User store initialized (in-memory)");

    let app = app_router(state);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut workers = JoinSet::new();

    for (index, port) in config.worker_ports().into_iter().enumerate() {
        let listener = TcpListener::bind((config.host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", config.host, port))?;
        let addr = listener.local_addr()?;

        tracing::info!(
            worker = index + 1,
            "Listening on http://{addr}, Swagger UI on http://{addr}/api-docs"
        );

        let app = app.clone();
        let mut shutdown = shutdown_rx.clone();
        workers.spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown.wait_for(|stop| *stop).await;
                })
                .await
        });
    }

    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections");
        let _ = shutdown_tx.send(true);
    });

    while let Some(joined) = workers.join_next().await {
        joined.context("Listener task failed")??;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
