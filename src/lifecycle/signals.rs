//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) or an internal shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - If the Ctrl+C handler cannot be installed, only the internal trigger stops the server

use tokio::sync::broadcast;

/// Resolve once Ctrl+C is received or the shutdown channel fires.
pub async fn wait_for_shutdown(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = shutdown.recv() => {}
    }

    tracing::info!("Shutdown signal received");
}
