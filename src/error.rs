/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every call made through the unsent client
//!
//! Network failures, JSON (de)serialization problems and non-2xx responses
//! are all normalized into a single [`ApiError`]. Callers only ever receive
//! `Ok(data)` or `Err(ApiError)`.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::fmt;

/// Error code used when the request never produced an HTTP response
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Error code used when a request body could not be serialized
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
/// Error code used when a response body did not match the expected shape
pub const DESERIALIZATION_ERROR: &str = "DESERIALIZATION_ERROR";
/// Error code used when the client is built without an API key
pub const MISSING_API_KEY: &str = "MISSING_API_KEY";

/// Normalized representation of any failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response, `None` when no response was received
    pub status: Option<StatusCode>,
    /// Machine readable error code, as sent by the server when available
    pub code: String,
    /// Human readable error message
    pub message: String,
    /// HTTP method of the failed request, if known
    pub method: Option<Method>,
    /// Request path of the failed request, if known
    pub path: Option<String>,
}

/// Result alias used across the crate
pub type UnsentResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates an error without an HTTP status
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: code.into(),
            message: message.into(),
            method: None,
            path: None,
        }
    }

    /// Creates an error for a response that came back with a failing status
    pub fn with_status(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: Some(status),
            ..Self::new(code, message)
        }
    }

    /// Attaches the method and path of the request that failed
    #[must_use]
    pub fn with_request(mut self, method: Method, path: impl Into<String>) -> Self {
        self.method = Some(method);
        self.path = Some(path.into());
        self
    }

    /// Builds an error from the body of a failed HTTP response
    ///
    /// Accepted payloads, in order of preference:
    /// * `{"error": {"code": "...", "message": "..."}}`
    /// * `{"error": "..."}`
    /// * `{"code": "...", "message": "..."}`
    ///
    /// Anything else falls back to a code derived from the status and the raw
    /// body (or the status reason when the body is empty) as the message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let fallback_code = status_code_name(status);
        let fallback_message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.to_string()
        };

        let payload = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => return Self::with_status(status, fallback_code, fallback_message),
        };

        let (code, message) = match payload.get("error") {
            Some(Value::Object(inner)) => (
                inner.get("code").and_then(Value::as_str),
                inner.get("message").and_then(Value::as_str),
            ),
            Some(Value::String(message)) => (None, Some(message.as_str())),
            _ => (
                payload.get("code").and_then(Value::as_str),
                payload.get("message").and_then(Value::as_str),
            ),
        };

        Self::with_status(
            status,
            code.map(str::to_string).unwrap_or(fallback_code),
            message.map(str::to_string).unwrap_or(fallback_message),
        )
    }

    /// True when the server answered with a 4xx status
    pub fn is_client_error(&self) -> bool {
        self.status.is_some_and(|s| s.is_client_error())
    }

    /// True when the server answered with a 5xx status
    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|s| s.is_server_error())
    }

    /// True when the server answered 404
    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }

    /// True when no HTTP response was received
    pub fn is_network_error(&self) -> bool {
        self.code == NETWORK_ERROR
    }
}

/// Upper snake case name for a status, e.g. `NOT_FOUND` for 404
fn status_code_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect(),
        None => format!("HTTP_{}", status.as_u16()),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(method), Some(path)) = (&self.method, &self.path) {
            write!(f, "{method} {path} ")?;
        }
        match self.status {
            Some(status) => write!(
                f,
                "failed with status {}: {} ({})",
                status.as_u16(),
                self.message,
                self.code
            ),
            None => write!(f, "failed: {} ({})", self.message, self.code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::with_status(status, status_code_name(status), err.to_string()),
            None if err.is_decode() => Self::new(DESERIALIZATION_ERROR, err.to_string()),
            None => Self::new(NETWORK_ERROR, err.to_string()),
        }
    }
}

/// Decoding failures only; request bodies are serialized by the transport,
/// which reports its own failures as [`SERIALIZATION_ERROR`]
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(DESERIALIZATION_ERROR, err.to_string())
    }
}
