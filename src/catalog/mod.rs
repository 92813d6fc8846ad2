//! Beer catalog subsystem.
//!
//! # Data Flow
//! ```text
//! raw query parameters
//!     → validator.rs (ValidatedRequest or ValidationError, no I/O)
//!     → upstream::BeerSource (single GET)
//!     → envelope.rs (error envelope? pass status + body through)
//!     → decode.rs (loosely typed records → Beer, all-or-nothing)
//!     → sort.rs (name filter, stable ordering)
//!     → JSON response
//! ```
//!
//! service.rs wires the steps together; the HTTP layer maps
//! [`CatalogError`] onto status codes.

pub mod decode;
pub mod envelope;
pub mod error;
pub mod service;
pub mod sort;
pub mod types;
pub mod validator;

pub use error::{CatalogError, CatalogResult, DecodeError, TransportError, ValidationError};
pub use service::BeerService;
pub use sort::SortOptions;
pub use types::{
    Beer, BeerQuery, Category, Rating, SortKey, SortOrder, UpstreamErrorEnvelope, ValidatedRequest,
};
pub use validator::validate;
