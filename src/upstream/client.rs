//! HTTP client for the upstream beer catalog.
//!
//! # Responsibilities
//! - Build `<base_url>/beers/<category>[?name=...]`
//! - Issue a single GET with a client-wide timeout
//! - Read the full body and hand it back untouched
//!
//! Status codes are not interpreted here; the catalog pipeline decides what
//! a non-2xx answer means.

use std::time::{Duration, Instant};

use url::Url;

use crate::catalog::error::TransportError;
use crate::catalog::types::Category;
use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::{BeerSource, UpstreamResponse};

/// [`BeerSource`] backed by the real upstream API.
#[derive(Debug, Clone)]
pub struct HttpBeerSource {
    client: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
    forward_name_filter: bool,
}

impl HttpBeerSource {
    /// Create a source from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("beer-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
            forward_name_filter: config.forward_name_filter,
        })
    }

    /// URL for a category listing.
    pub fn beers_url(&self, category: Category, name: Option<&str>) -> Result<Url, TransportError> {
        let name = name.filter(|_| self.forward_name_filter);
        beers_url(&self.base_url, category, name)
    }

    fn map_error(&self, err: reqwest::Error, on_body: bool) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout_secs)
        } else if on_body {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl BeerSource for HttpBeerSource {
    async fn fetch(
        &self,
        category: Category,
        name: Option<&str>,
    ) -> Result<UpstreamResponse, TransportError> {
        let url = self.beers_url(category, name)?;
        let start = Instant::now();

        tracing::debug!(url = %url, "Fetching upstream catalog");

        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                let err = self.map_error(e, false);
                tracing::error!(url = %url, error = %err, "Upstream request failed");
                metrics::record_upstream(category.as_str(), "error", start);
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            let err = self.map_error(e, true);
            tracing::error!(url = %url, status, error = %err, "Failed to read upstream body");
            metrics::record_upstream(category.as_str(), "error", start);
            err
        })?;

        tracing::debug!(
            url = %url,
            status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream responded"
        );
        metrics::record_upstream(category.as_str(), &status.to_string(), start);

        Ok(UpstreamResponse { status, body })
    }
}

fn beers_url(base: &Url, category: Category, name: Option<&str>) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| TransportError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(["beers", category.as_str()]);

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        url.query_pairs_mut().append_pair("name", name);
    }
    Ok(url)
}
