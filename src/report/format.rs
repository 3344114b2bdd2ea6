//! Plain-text request report.
//!
//! A report is a list of lines, each made of spans tagged with a [`Tone`].
//! Tones carry no text of their own; the palette decides how they look.

use serde_json::{Map, Value};

use crate::http::request::{RequestBody, RequestDescription};

pub const OPENING_BANNER: &str = "================== WEBHOOK REQUEST ==================";
pub const NO_QUERY_MARKER: &str = "No query parameters";
pub const NO_BODY_MARKER: &str = "No body content";

/// Header names containing any of these are shown in the header dump.
pub const HEADER_MARKERS: [&str; 4] = ["content-", "authorization", "user-agent", "x-"];

/// Display category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Plain,
    Banner,
    Timestamp,
    Method,
    Url,
    Query,
    Body,
    Headers,
    Muted,
    Strong,
    Notice,
    Warning,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

pub type Line = Vec<Span>;

/// Report block for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    /// Lay out the report for `description`, stamped with `timestamp`.
    pub fn build(description: &RequestDescription, timestamp: &str) -> Self {
        let mut report = Report::default();

        report.push(vec![Span::new(OPENING_BANNER, Tone::Banner)]);
        report.push(vec![
            Span::new("Timestamp:", Tone::Timestamp),
            Span::plain(format!(" {timestamp}")),
        ]);
        report.push(vec![
            Span::new("Method:", Tone::Method),
            Span::plain(" "),
            Span::new(description.method.as_str(), Tone::Strong),
        ]);
        report.push(vec![
            Span::new("URL:", Tone::Url),
            Span::plain(format!(" {}", description.url)),
        ]);

        report.push(vec![Span::new("Query String:", Tone::Query)]);
        if description.query.is_empty() {
            report.push(vec![Span::plain(NO_QUERY_MARKER)]);
        } else {
            report.push(vec![Span::plain(pretty(&Value::Object(description.query.clone())))]);
        }

        report.push_body(description);

        let headers = filter_headers(&description.headers);
        if !headers.is_empty() {
            report.push(vec![Span::new("Headers:", Tone::Headers)]);
            report.push(vec![Span::plain(pretty(&Value::Object(headers)))]);
        }

        report.push(vec![Span::new(closing_banner(), Tone::Banner)]);
        report
    }

    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn push_body(&mut self, description: &RequestDescription) {
        if !matches!(description.method.as_str(), "POST" | "PUT") {
            return;
        }
        let Some(body) = &description.body else {
            return;
        };

        let declared_json = description
            .content_type
            .to_ascii_lowercase()
            .contains("application/json");

        match body {
            RequestBody::Json(value) if declared_json && body.has_content() => {
                self.push(vec![Span::new("JSON Body:", Tone::Body)]);
                self.push(vec![Span::plain(pretty(value))]);
            }
            _ if body.has_content() => {
                self.push(vec![Span::new(
                    format!("Body ({}):", description.content_type),
                    Tone::Body,
                )]);
                self.push(vec![Span::plain(raw(body))]);
            }
            _ => self.push(vec![Span::new(NO_BODY_MARKER, Tone::Muted)]),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Report text with all styling stripped.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Closing banner, same width as the opening one.
pub fn closing_banner() -> String {
    "=".repeat(OPENING_BANNER.chars().count())
}

/// Headers worth showing, in request order.
pub fn filter_headers(headers: &[(String, String)]) -> Map<String, Value> {
    headers
        .iter()
        .filter(|(name, _)| {
            let name = name.to_ascii_lowercase();
            HEADER_MARKERS.iter().any(|marker| name.contains(marker))
        })
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect()
}

/// Two-space indented JSON; falls back to the compact form.
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn raw(body: &RequestBody) -> String {
    match body {
        RequestBody::Raw(text) => text.clone(),
        RequestBody::Json(value) => value.to_string(),
        RequestBody::Form(map) => Value::Object(map.clone()).to_string(),
    }
}
