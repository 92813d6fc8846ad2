//! Error → HTTP response mapping.
//!
//! | error                 | status                  | body                   |
//! |-----------------------|-------------------------|------------------------|
//! | `Validation`          | 400                     | `{"error": message}`   |
//! | `Upstream`            | upstream's own status   | upstream envelope      |
//! | `Transport`, `Decode` | 500                     | `{"error": message}`   |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// JSON error body used for every error the service originates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a `{"error": ...}` response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

/// Status code a catalog error is answered with.
pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        CatalogError::Transport(_) | CatalogError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        match self {
            CatalogError::Upstream { envelope, .. } => (status, Json(envelope)).into_response(),
            other => error_response(status, other.to_string()),
        }
    }
}
