//! Programmatic stop for the echo server.
//!
//! `main` keeps a [`Shutdown`] alongside Ctrl+C handling; tests use it to stop
//! a server bound to an ephemeral port.

use tokio::sync::broadcast;

/// Handle that stops every server subscribed to it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to [`HttpServer::run`](crate::http::HttpServer::run).
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop subscribed servers. Returns `false` if none is listening.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        assert!(shutdown.trigger());
        assert!(rx.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_subscribers() {
        assert!(!Shutdown::new().trigger());
    }
}
