//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl-C) or SIGTERM
//! - Translate the signal into a shutdown trigger

use crate::lifecycle::shutdown::{Shutdown, ShutdownReason};

/// Resolve once the process is asked to stop, then trigger `shutdown`.
pub async fn shutdown_on_signal(shutdown: &Shutdown) -> std::io::Result<ShutdownReason> {
    let reason = wait_for_signal().await?;
    shutdown.trigger(reason);
    Ok(reason)
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<ShutdownReason> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|_| ShutdownReason::Interrupt),
        _ = terminate.recv() => Ok(ShutdownReason::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<ShutdownReason> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownReason::Interrupt)
}
