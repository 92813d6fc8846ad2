//! Upstream error envelope detection.
//!
//! The upstream API has no discriminator between a record list and an error
//! body. Any top-level JSON object is treated as an error envelope, even when
//! its fields are missing; a record list is always an array.
//!
//! # Status selection
//! 1. The envelope's `error` code, if it is a valid HTTP error status
//! 2. Otherwise the upstream HTTP status, if it is an error status
//! 3. Otherwise 502 Bad Gateway

use axum::http::StatusCode;
use serde_json::{Map, Value};

use crate::catalog::types::UpstreamErrorEnvelope;

/// An error envelope together with the status to answer the caller with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedError {
    pub status: StatusCode,
    pub envelope: UpstreamErrorEnvelope,
}

/// Inspect an upstream body and return the error it carries, if any.
pub fn detect_error(upstream_status: u16, body: &[u8]) -> Option<DetectedError> {
    let object: Map<String, Value> = serde_json::from_slice(body).ok()?;

    let envelope = UpstreamErrorEnvelope {
        error: object.get("error").and_then(Value::as_i64).unwrap_or(0),
        message: object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    };

    let status = error_status(envelope.error)
        .or_else(|| error_status(i64::from(upstream_status)))
        .unwrap_or(StatusCode::BAD_GATEWAY);

    Some(DetectedError { status, envelope })
}

fn error_status(code: i64) -> Option<StatusCode> {
    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_status_is_propagated() {
        let detected = detect_error(200, br#"{"error":404,"message":"not found"}"#).unwrap();
        assert_eq!(detected.status, StatusCode::NOT_FOUND);
        assert_eq!(
            detected.envelope,
            UpstreamErrorEnvelope {
                error: 404,
                message: "not found".into()
            }
        );
    }

    #[test]
    fn test_record_list_is_not_an_error() {
        assert!(detect_error(200, br#"[{"id":1}]"#).is_none());
        assert!(detect_error(200, b"[]").is_none());
    }

    #[test]
    fn test_non_json_is_not_an_envelope() {
        assert!(detect_error(502, b"<html>Bad Gateway</html>").is_none());
    }

    #[test]
    fn test_empty_object_falls_back_to_http_status() {
        let detected = detect_error(503, b"{}").unwrap();
        assert_eq!(detected.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(detected.envelope, UpstreamErrorEnvelope::default());
    }

    #[test]
    fn test_unusable_codes_become_bad_gateway() {
        let detected = detect_error(200, br#"{"error":0,"message":"?"}"#).unwrap();
        assert_eq!(detected.status, StatusCode::BAD_GATEWAY);

        let detected = detect_error(200, br#"{"error":200,"message":"ok?"}"#).unwrap();
        assert_eq!(detected.status, StatusCode::BAD_GATEWAY);

        let detected = detect_error(200, br#"{"error":70000}"#).unwrap();
        assert_eq!(detected.status, StatusCode::BAD_GATEWAY);
    }
}
