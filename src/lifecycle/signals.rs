//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT or SIGTERM (Ctrl+C only on non-Unix targets)
//! - Translate the signal into a shutdown trigger

use std::fmt;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::{Shutdown, ShutdownReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    pub fn name(&self) -> &'static str {
        match self {
            TerminationSignal::Interrupt => "SIGINT",
            TerminationSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(unix)]
pub async fn wait_for_termination() -> std::io::Result<TerminationSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => Ok(TerminationSignal::Interrupt),
        _ = terminate.recv() => Ok(TerminationSignal::Terminate),
    }
}

#[cfg(not(unix))]
pub async fn wait_for_termination() -> std::io::Result<TerminationSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(TerminationSignal::Interrupt)
}

/// Trigger `shutdown` on the first termination signal.
pub fn spawn_watcher(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_termination().await {
            Ok(signal) => {
                tracing::info!(signal = %signal, "Termination signal received");
                shutdown.trigger(ShutdownReason::Signal(signal));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handlers");
            }
        }
    })
}
