//! Upstream beer catalog access.
//!
//! # Data Flow
//! ```text
//! ValidatedRequest
//!     → BeerSource::fetch (one GET per inbound request, no retries)
//!     → UpstreamResponse { status, body }
//!     → catalog::envelope / catalog::decode
//! ```
//!
//! The catalog pipeline only depends on the [`BeerSource`] trait, so tests
//! can substitute an in-memory source.

pub mod client;

use std::future::Future;

use axum::body::Bytes;

use crate::catalog::error::TransportError;
use crate::catalog::types::Category;

pub use client::HttpBeerSource;

/// Raw upstream answer, status and fully read body.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can list beers of a category.
pub trait BeerSource: Send + Sync {
    /// Fetch the raw record list for `category`, optionally narrowed by name.
    fn fetch(
        &self,
        category: Category,
        name: Option<&str>,
    ) -> impl Future<Output = Result<UpstreamResponse, TransportError>> + Send;
}
