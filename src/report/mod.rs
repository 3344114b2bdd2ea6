//! Operator-facing request report.
//!
//! # Data Flow
//! ```text
//! RequestDescription
//!     → format.rs (plain-text lines tagged with tones)
//!     → style.rs (palette: tones → ANSI styles, or nothing)
//!     → sink.rs (stdout, or memory in tests)
//! ```
//!
//! # Design Decisions
//! - Text content never depends on styling
//! - Logging never fails the request; sink errors are traced and dropped
//! - One write per block so concurrent reports do not interleave line by line

pub mod format;
pub mod logger;
pub mod sink;
pub mod style;

pub use format::{Report, Tone};
pub use logger::RequestLogger;
pub use sink::{MemorySink, ReportSink, StdoutSink};
pub use style::Palette;
