//! Destinations for rendered report blocks.

use std::io::{self, Write};
use std::sync::Mutex;

/// Receives one fully rendered report block per request.
pub trait ReportSink: Send + Sync {
    fn emit(&self, block: &str) -> io::Result<()>;
}

/// Writes blocks to the process stdout in a single locked write.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, block: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(block.as_bytes())?;
        out.flush()
    }
}

/// Keeps blocks in memory. Used by tests and embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn blocks(&self) -> Vec<String> {
        self.blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, block: &str) -> io::Result<()> {
        self.blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(block.to_string());
        Ok(())
    }
}
