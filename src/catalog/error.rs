//! Error taxonomy for the beer catalog pipeline.

use std::fmt;

use thiserror::Error;

use crate::catalog::types::UpstreamErrorEnvelope;

/// A single rejected query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Query validation failure. Carries every violated field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", join(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An upstream record whose shape could not be normalized.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported {field} type: {found}")]
    UnsupportedType {
        field: &'static str,
        found: &'static str,
    },

    #[error("invalid id string {0:?}")]
    InvalidId(String),

    #[error("malformed record list: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

/// Failure talking to the upstream API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    #[error("upstream timed out after {0}s")]
    Timeout(u64),

    #[error("upstream request failed: {0}")]
    Request(String),

    #[error("error reading upstream response body: {0}")]
    Body(String),

    #[error("upstream returned status {0} without an error body")]
    UnexpectedStatus(u16),
}

/// Umbrella error of the catalog pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upstream reported a failure; status and envelope are passed through.
    #[error("upstream error {status}: {}", message_of(.envelope))]
    Upstream {
        status: u16,
        envelope: UpstreamErrorEnvelope,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

fn message_of(envelope: &UpstreamErrorEnvelope) -> &str {
    &envelope.message
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
