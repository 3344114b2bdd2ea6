//! Shutdown coordination.

use std::fmt;

use tokio::sync::broadcast::{self, error::RecvError};

use crate::lifecycle::signals::TerminationSignal;
use crate::report::format::{Line, Span, Tone};

/// Why the server stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// An OS termination signal arrived.
    Signal(TerminationSignal),
    /// Stopped programmatically, or the serve loop ended on its own.
    Requested,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Signal(signal) => write!(f, "{signal}"),
            ShutdownReason::Requested => f.write_str("shutdown requested"),
        }
    }
}

/// Process lifecycle handle.
///
/// Owned by `main`; the signal watcher triggers it and the server listens on it.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<ShutdownReason>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Listeners only observe triggers sent after they subscribed.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self, reason: ShutdownReason) {
        let _ = self.tx.send(reason);
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of [`Shutdown`].
#[derive(Debug)]
pub struct ShutdownListener {
    rx: broadcast::Receiver<ShutdownReason>,
}

impl ShutdownListener {
    /// Resolve once shutdown is triggered.
    ///
    /// Pends forever if every [`Shutdown`] handle is dropped without triggering.
    pub async fn wait(&mut self) -> ShutdownReason {
        match self.rx.recv().await {
            Ok(reason) => reason,
            Err(RecvError::Lagged(_)) => ShutdownReason::Requested,
            Err(RecvError::Closed) => std::future::pending().await,
        }
    }
}

/// Console line announcing the shutdown.
pub fn notice(reason: ShutdownReason) -> Line {
    let text = match reason {
        ShutdownReason::Signal(signal) => format!("Received {signal}, shutting down gracefully..."),
        ShutdownReason::Requested => "Shutting down...".to_string(),
    };
    vec![Span::new(text, Tone::Warning)]
}
