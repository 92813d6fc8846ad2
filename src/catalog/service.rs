//! Beer listing pipeline.
//!
//! ```text
//! BeerQuery → validate → fetch → detect_error → decode_batch → filter_and_sort
//! ```
//!
//! Every step runs in sequence for a single request. Nothing is shared
//! between requests apart from the upstream client.

use crate::catalog::decode::decode_batch;
use crate::catalog::envelope::detect_error;
use crate::catalog::error::{CatalogError, CatalogResult, TransportError};
use crate::catalog::sort::{filter_and_sort, SortOptions};
use crate::catalog::types::{Beer, BeerQuery};
use crate::catalog::validator::validate;
use crate::upstream::BeerSource;

/// Orchestrates a beer listing against a [`BeerSource`].
#[derive(Debug, Clone)]
pub struct BeerService<S> {
    source: S,
    options: SortOptions,
}

impl<S: BeerSource> BeerService<S> {
    pub fn new(source: S, options: SortOptions) -> Self {
        Self { source, options }
    }

    /// Run the full pipeline for one `GET /beers` request.
    pub async fn list_beers(&self, query: &BeerQuery) -> CatalogResult<Vec<Beer>> {
        let request = validate(query).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected beer query");
        })?;

        let response = self
            .source
            .fetch(request.category, request.name.as_deref())
            .await?;

        if let Some(detected) = detect_error(response.status, &response.body) {
            tracing::warn!(
                category = %request.category,
                upstream_status = response.status,
                status = detected.status.as_u16(),
                message = %detected.envelope.message,
                "Upstream returned an error envelope"
            );
            return Err(CatalogError::Upstream {
                status: detected.status.as_u16(),
                envelope: detected.envelope,
            });
        }

        if !response.is_success() {
            return Err(TransportError::UnexpectedStatus(response.status).into());
        }

        let beers = decode_batch(&response.body).inspect_err(|e| {
            tracing::error!(
                category = %request.category,
                error = %e,
                "Failed to decode upstream records"
            );
        })?;
        let received = beers.len();

        let beers = filter_and_sort(beers, &request, self.options);

        tracing::debug!(
            category = %request.category,
            received,
            returned = beers.len(),
            order_by = request.order_by.map(|k| k.as_str()),
            order = %request.order,
            "Beer listing complete"
        );

        Ok(beers)
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }
}
