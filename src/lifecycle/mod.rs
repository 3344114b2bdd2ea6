//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Bind listener → Print banner → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Server stops accepting → Notice printed → Exit 0
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal
//! - No draining: in-flight requests are dropped on shutdown

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener, ShutdownReason};
pub use signals::TerminationSignal;

use crate::report::format::Line;
use crate::report::{Palette, ReportSink, StdoutSink};

/// Write operator-facing lines to stdout, ignoring write errors.
pub fn announce(palette: Palette, lines: &[Line]) {
    let mut block: String = lines
        .iter()
        .map(|line| palette.paint_line(line))
        .collect::<Vec<_>>()
        .join("\n");
    block.push('\n');

    if let Err(e) = StdoutSink.emit(&block) {
        tracing::warn!(error = %e, "Failed to write to console");
    }
}
