//! Error types for the news client.
//!
//! # Design
//! Callers see exactly one error type, `RequestError`. It is the nested
//! `error` object of a failed response, unwrapped one level: the HTTP status
//! and headers are discarded. Failures that carry no such payload (network
//! errors, bodies without an `error` field, undecodable bodies) are turned
//! into a `RequestError` built from the original failure, so the caller never
//! receives an empty error.
//!
//! `TransportError` and `ConfigError` are the errors of the two collaborators
//! around the client: the HTTP transport and the settings source.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// The error payload surfaced by `NewsClient::get_news`.
///
/// `message` holds the human-readable text (empty when the payload has
/// none). Fields other than `code` and `message` are kept verbatim in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{}", summary(.code, .message))]
pub struct RequestError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn summary(code: &Option<String>, message: &str) -> String {
    match (code, message.is_empty()) {
        (_, false) => message.to_string(),
        (Some(code), true) => code.clone(),
        (None, true) => "request failed".to_string(),
    }
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// Build the error from the value of a response's `error` field.
    ///
    /// Objects map `code` and `message` onto fields and keep everything else
    /// in `extra`. A bare string becomes the message; any other value is
    /// rendered as JSON text.
    pub fn from_payload(payload: Value) -> Self {
        match payload {
            Value::Object(mut fields) => {
                let code = fields.remove("code").and_then(scalar_text);
                let message = fields.remove("message").and_then(scalar_text).unwrap_or_default();
                Self {
                    code,
                    message,
                    extra: fields,
                }
            }
            Value::String(message) => Self::new(message),
            other => Self::new(other.to_string()),
        }
    }

    /// Unwrap the nested `error` field of a failed response body, falling
    /// back to a description of the status and body when there is none.
    pub fn from_failed_response(status: u16, body: &str) -> Self {
        if let Ok(Value::Object(mut envelope)) = serde_json::from_str::<Value>(body) {
            match envelope.remove("error") {
                None | Some(Value::Null) => {}
                Some(payload) => return Self::from_payload(payload),
            }
        }
        let body = body.trim();
        if body.is_empty() {
            Self::new(format!("HTTP {status}"))
        } else {
            Self::new(format!("HTTP {status}: {body}"))
        }
    }

    pub fn from_transport(err: &TransportError) -> Self {
        Self::new(err.to_string())
    }

    pub fn from_malformed_body(err: &serde_json::Error) -> Self {
        Self::new(format!("malformed response body: {err}"))
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Failures where the transport produced no response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connecting, sending, or receiving the response head failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Missing or unusable client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_object_maps_code_and_message() {
        let err = RequestError::from_payload(json!({
            "code": "validation_error",
            "message": "Validation error: access_key is required",
            "context": {"access_key": ["required"]}
        }));
        assert_eq!(err.code.as_deref(), Some("validation_error"));
        assert_eq!(err.message, "Validation error: access_key is required");
        assert_eq!(err.extra["context"], json!({"access_key": ["required"]}));
    }

    #[test]
    fn numeric_code_is_kept_as_text() {
        let err = RequestError::from_payload(json!({"code": 101, "message": "bad key"}));
        assert_eq!(err.code.as_deref(), Some("101"));
    }

    #[test]
    fn payload_string_becomes_message() {
        let err = RequestError::from_payload(json!("quota exceeded"));
        assert_eq!(err.message, "quota exceeded");
        assert!(err.code.is_none());
    }

    #[test]
    fn failed_response_without_error_field_falls_back() {
        let err = RequestError::from_failed_response(502, r#"{"detail":"upstream down"}"#);
        assert_eq!(err.message, r#"HTTP 502: {"detail":"upstream down"}"#);
    }

    #[test]
    fn null_error_field_falls_back() {
        let err = RequestError::from_failed_response(500, r#"{"error":null}"#);
        assert!(err.message.starts_with("HTTP 500"));
    }

    #[test]
    fn failed_response_with_empty_body() {
        let err = RequestError::from_failed_response(503, "");
        assert_eq!(err.message, "HTTP 503");
    }

    #[test]
    fn display_prefers_message_then_code() {
        assert_eq!(RequestError::new("boom").to_string(), "boom");

        let err = RequestError::from_payload(json!({"code": "usage_limit_reached"}));
        assert_eq!(err.to_string(), "usage_limit_reached");

        let err = RequestError::from_payload(json!({}));
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn serializes_back_to_payload_shape() {
        let payload = json!({"code": "invalid_access_key", "message": "nope", "hint": "check key"});
        let err = RequestError::from_payload(payload.clone());
        assert_eq!(serde_json::to_value(&err).unwrap(), payload);
    }
}
