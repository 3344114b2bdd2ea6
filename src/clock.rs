//! Wall-clock timestamps shared by the report and the ack payload.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format as RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current wall-clock time, formatted.
pub fn now() -> String {
    format_timestamp(Utc::now())
}
