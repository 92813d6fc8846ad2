//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream base URL is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ConfigViolation>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    /// Dotted path of the offending key, e.g. `upstream.base_url`.
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ConfigViolation>> {
    let mut errors = Vec::new();
    let mut fail = |key: &'static str, message: String| {
        errors.push(ConfigViolation { key, message });
    };

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        fail(
            "listener.bind_address",
            format!("{:?} is not a socket address: {e}", config.listener.bind_address),
        );
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            fail("upstream.base_url", format!("unsupported scheme {:?}", url.scheme()));
        }
        Ok(url) if url.cannot_be_a_base() => {
            fail("upstream.base_url", "must be a base URL".to_string());
        }
        Ok(_) => {}
        Err(e) => fail("upstream.base_url", format!("invalid URL: {e}")),
    }

    if config.upstream.timeout_secs == 0 {
        fail("upstream.timeout_secs", "must be greater than 0".to_string());
    }

    if config.timeouts.request_secs == 0 {
        fail("timeouts.request_secs", "must be greater than 0".to_string());
    } else if config.timeouts.request_secs <= config.upstream.timeout_secs {
        // The inbound timeout must not fire before the upstream one can.
        fail(
            "timeouts.request_secs",
            format!(
                "must be longer than upstream.timeout_secs ({})",
                config.upstream.timeout_secs
            ),
        );
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        fail(
            "observability.log_level",
            format!(
                "{:?} is not one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        );
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            fail("observability.metrics_address", format!("not a socket address: {e}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
