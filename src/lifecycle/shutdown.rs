//! Shutdown coordination for the host.

use tokio::sync::broadcast;

/// Why the host is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT / Ctrl-C.
    Interrupt,
    /// SIGTERM.
    Terminate,
    /// Requested from inside the process.
    Requested,
}

/// Coordinator for host shutdown.
///
/// Every waiter subscribes before the signal is triggered.
pub struct Shutdown {
    tx: broadcast::Sender<ShutdownReason>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShutdownReason> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Returns how many waiters were notified.
    pub fn trigger(&self, reason: ShutdownReason) -> usize {
        tracing::info!(reason = ?reason, "Shutdown triggered");
        self.tx.send(reason).unwrap_or(0)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
