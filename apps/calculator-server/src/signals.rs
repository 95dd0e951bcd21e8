//! Termination signal handling.

use anyhow::Result;
use tokio::signal;

/// Resolve once Ctrl-C or, on Unix, SIGTERM arrives.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Received Ctrl+C signal");
        }
        result = terminate() => {
            result?;
            tracing::info!("Received SIGTERM signal");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn terminate() -> Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<()> {
    std::future::pending().await
}
