//! Normalized description of an inbound webhook request.
//!
//! # Responsibilities
//! - Capture method and original path + query exactly as received
//! - Parse the query string into an ordered mapping, expanding `a[b]` keys
//! - Collapse headers into one lower-case name → value mapping
//! - Parse JSON and url-encoded bodies, keep everything else as raw text
//!
//! # Design Decisions
//! - Parsing never fails: malformed payloads degrade to raw text
//! - Body size is capped by the HTTP layer before extraction runs

use std::borrow::Cow;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, OriginalUri, Request},
    http::{header, HeaderMap, Method, Uri},
};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Parsed request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON-like content type with a payload that parsed.
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Map<String, Value>),
    /// Anything else, lossily decoded as UTF-8.
    Raw(String),
}

impl RequestBody {
    /// Whether the body's key set is non-empty.
    pub fn has_content(&self) -> bool {
        match self {
            RequestBody::Json(Value::Object(map)) => !map.is_empty(),
            RequestBody::Json(Value::Array(items)) => !items.is_empty(),
            RequestBody::Json(Value::String(s)) => !s.is_empty(),
            RequestBody::Json(_) => false,
            RequestBody::Form(map) => !map.is_empty(),
            RequestBody::Raw(text) => !text.is_empty(),
        }
    }
}

/// One inbound request, valid for the duration of a single handler call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescription {
    /// Method token, case preserved.
    pub method: String,
    /// Path and query string as received.
    pub url: String,
    /// Decoded query parameters in arrival order.
    pub query: Map<String, Value>,
    /// Lower-case header names with repeated values joined by `", "`.
    pub headers: Vec<(String, String)>,
    /// Parsed payload. `None` for an empty body on methods other than
    /// POST, PUT and PATCH.
    pub body: Option<RequestBody>,
    /// Value of the `Content-Type` header, empty when missing.
    pub content_type: String,
}

impl RequestDescription {
    pub fn new(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Self {
        let url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        let query = uri
            .query()
            .map(|q| collect_pairs(form_urlencoded::parse(q.as_bytes())))
            .unwrap_or_default();

        let content_type = headers
            .get(header::CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();

        Self {
            method: method.as_str().to_string(),
            url,
            query,
            headers: collapse_headers(headers),
            body: parse_body(&content_type, body).or_else(|| empty_body(method)),
            content_type,
        }
    }

    /// Look up a header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequest<S> for RequestDescription
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let uri = req
            .extensions()
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.clone())
            .unwrap_or_else(|| req.uri().clone());
        let headers = req.headers().clone();

        let body = Bytes::from_request(req, state).await?;

        Ok(Self::new(&method, &uri, &headers, &body))
    }
}

/// Build an ordered mapping from decoded pairs.
///
/// Bracket keys nest (`a[b]=1` → `{"a":{"b":"1"}}`), `a[]` appends to an
/// array, and repeated plain keys become arrays.
fn collect_pairs<'a, I>(pairs: I) -> Map<String, Value>
where
    I: Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
{
    let mut map = Map::new();
    for (key, value) in pairs {
        let value = Value::String(value.into_owned());
        match key_path(&key) {
            Some(path) => insert_at(&mut map, path[0], &path[1..], value),
            None => append(&mut map, &key, value),
        }
    }
    map
}

/// Split `root[a][b]` into `["root", "a", "b"]`. `None` for plain or malformed keys.
fn key_path(key: &str) -> Option<Vec<&str>> {
    let open = key.find('[')?;
    if open == 0 {
        return None;
    }

    let mut path = vec![&key[..open]];
    let mut rest = &key[open..];
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        path.push(&inner[..close]);
        rest = &inner[close + 1..];
    }
    Some(path)
}

fn insert_at(map: &mut Map<String, Value>, key: &str, rest: &[&str], value: Value) {
    match rest.split_first() {
        None => append(map, key, value),
        Some((&"", tail)) => {
            let item = nest(tail, value);
            match map.get_mut(key) {
                Some(Value::Array(items)) => items.push(item),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, item]);
                }
                None => {
                    map.insert(key.to_string(), Value::Array(vec![item]));
                }
            }
        }
        Some((next, tail)) => match map.get_mut(key) {
            Some(Value::Object(inner)) => insert_at(inner, next, tail, value),
            Some(_) => append(map, key, nest(rest, value)),
            None => {
                map.insert(key.to_string(), nest(rest, value));
            }
        },
    }
}

/// Fresh value for the remaining path segments.
fn nest(path: &[&str], value: Value) -> Value {
    path.iter().rev().fold(value, |inner, segment| {
        if segment.is_empty() {
            Value::Array(vec![inner])
        } else {
            let mut map = Map::new();
            map.insert(segment.to_string(), inner);
            Value::Object(map)
        }
    })
}

/// Insert `value`, turning a repeated key into an array.
fn append(map: &mut Map<String, Value>, key: &str, value: Value) {
    match map.get_mut(key) {
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key.to_string(), value);
        }
    }
}

fn collapse_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut collapsed: Vec<(String, String)> = Vec::with_capacity(headers.keys_len());
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        collapsed.push((name.as_str().to_string(), joined));
    }
    collapsed
}

/// Media type without parameters, lower-cased.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(mime: &str) -> bool {
    mime == "application/json" || mime.ends_with("+json")
}

/// POST, PUT and PATCH always carry a body, even a zero-length one.
fn empty_body(method: &Method) -> Option<RequestBody> {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
        .then(|| RequestBody::Raw(String::new()))
}

fn parse_body(content_type: &str, bytes: &[u8]) -> Option<RequestBody> {
    if bytes.is_empty() {
        return None;
    }

    let mime = essence(content_type);
    if is_json(&mime) {
        match serde_json::from_slice(bytes) {
            Ok(value) => return Some(RequestBody::Json(value)),
            Err(e) => {
                tracing::debug!(error = %e, content_type = %content_type, "Body is not valid JSON, keeping raw text");
            }
        }
    } else if mime == "application/x-www-form-urlencoded" {
        return Some(RequestBody::Form(collect_pairs(form_urlencoded::parse(bytes))));
    }

    Some(RequestBody::Raw(String::from_utf8_lossy(bytes).into_owned()))
}
