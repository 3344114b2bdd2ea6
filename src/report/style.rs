//! Console styling layer.
//!
//! Maps report tones to ANSI styles. With styling disabled the output is the
//! report's plain text byte for byte.

use owo_colors::{OwoColorize, Style};

use crate::report::format::{Line, Report, Span, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn ansi() -> Self {
        Self::new(true)
    }

    fn style(tone: Tone) -> Style {
        match tone {
            Tone::Plain => Style::new(),
            Tone::Banner => Style::new().bold().cyan(),
            Tone::Timestamp | Tone::Body | Tone::Warning => Style::new().yellow(),
            Tone::Method => Style::new().green(),
            Tone::Url => Style::new().blue(),
            Tone::Query => Style::new().magenta(),
            Tone::Headers => Style::new().white(),
            Tone::Muted => Style::new().dimmed(),
            Tone::Strong => Style::new().bold(),
            Tone::Notice => Style::new().bold().green(),
            Tone::Hint => Style::new().cyan(),
        }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled || tone == Tone::Plain {
            return text.to_string();
        }
        text.style(Self::style(tone)).to_string()
    }

    pub fn paint_span(&self, span: &Span) -> String {
        self.paint(&span.text, span.tone)
    }

    pub fn paint_line(&self, line: &Line) -> String {
        line.iter().map(|span| self.paint_span(span)).collect()
    }

    pub fn render(&self, report: &Report) -> String {
        report
            .lines()
            .iter()
            .map(|line| self.paint_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}
