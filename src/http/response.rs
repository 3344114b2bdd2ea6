//! Acknowledgement payload returned for every webhook.
//!
//! # Design Decisions
//! - No error path: every request that reaches the handler is acknowledged
//! - `timestamp` and `receivedAt` carry the same instant; both keys are kept
//!   for clients that read either one

use serde::Serialize;

use crate::clock;
use crate::http::request::RequestDescription;

pub const ACK_MESSAGE: &str = "Webhook received successfully";

/// JSON body of the `200 OK` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AckPayload {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub method: String,
    pub url: String,
    pub received_at: String,
}

/// Build the acknowledgement for a request.
pub fn respond(description: &RequestDescription) -> AckPayload {
    respond_at(description, clock::now())
}

fn respond_at(description: &RequestDescription, timestamp: String) -> AckPayload {
    AckPayload {
        success: true,
        message: ACK_MESSAGE,
        received_at: timestamp.clone(),
        timestamp,
        method: description.method.clone(),
        url: description.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method, Uri};

    fn description(method: &str, uri: &str) -> RequestDescription {
        let method = Method::from_bytes(method.as_bytes()).unwrap();
        let uri: Uri = uri.parse().unwrap();
        RequestDescription::new(&method, &uri, &HeaderMap::new(), b"")
    }

    #[test]
    fn test_payload_echoes_request() {
        let ack = respond(&description("DELETE", "/orders/9?force=true"));
        assert!(ack.success);
        assert_eq!(ack.message, "Webhook received successfully");
        assert_eq!(ack.method, "DELETE");
        assert_eq!(ack.url, "/orders/9?force=true");
        assert_eq!(ack.timestamp, ack.received_at);
    }

    #[test]
    fn test_serialized_keys() {
        let ack = respond_at(&description("POST", "/hook"), "2024-05-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "Webhook received successfully",
                "timestamp": "2024-05-01T00:00:00.000Z",
                "method": "POST",
                "url": "/hook",
                "receivedAt": "2024-05-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_repeat_requests_differ_only_in_time() {
        let desc = description("GET", "/ping?n=1");
        let mut first = respond(&desc);
        let mut second = respond(&desc);
        for ack in [&mut first, &mut second] {
            ack.timestamp.clear();
            ack.received_at.clear();
        }
        assert_eq!(first, second);
    }
}
