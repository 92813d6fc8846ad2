//! Beer catalog proxy library.
//!
//! Validates `GET /beers` queries, fetches the upstream catalog, normalizes
//! its loosely typed records and returns them filtered and ordered.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
