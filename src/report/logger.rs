//! Request logger: builds, styles and emits the report for each webhook.

use std::sync::Arc;

use crate::clock;
use crate::http::request::RequestDescription;
use crate::report::format::Report;
use crate::report::sink::{ReportSink, StdoutSink};
use crate::report::style::Palette;

#[derive(Clone)]
pub struct RequestLogger {
    palette: Palette,
    sink: Arc<dyn ReportSink>,
}

impl RequestLogger {
    pub fn new(palette: Palette, sink: Arc<dyn ReportSink>) -> Self {
        Self { palette, sink }
    }

    /// Logger writing to stdout.
    pub fn stdout(palette: Palette) -> Self {
        Self::new(palette, Arc::new(StdoutSink))
    }

    /// Emit the report for `description`. Never fails; write errors are only traced.
    pub fn log(&self, description: &RequestDescription) {
        let report = Report::build(description, &clock::now());
        let block = format!("\n{}\n\n", self.palette.render(&report));

        if let Err(e) = self.sink.emit(&block) {
            tracing::warn!(error = %e, url = %description.url, "Failed to write request report");
        }
    }
}

impl std::fmt::Debug for RequestLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLogger")
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}
