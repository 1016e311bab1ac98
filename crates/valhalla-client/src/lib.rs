//! Valhalla client entry points.
//!
//! This crate wraps the HTTP API of a [Valhalla] routing engine instance. It
//! owns the backend base URL, translates typed route and matrix requests into
//! Valhalla's wire format, and decodes responses into opaque JSON values.
//! Higher-level consumers (the gateway service) should only depend on the
//! types exported here instead of speaking to the backend directly.
//!
//! [Valhalla]: https://valhalla.github.io/valhalla/

pub mod client;
pub mod error;
pub mod types;

pub use client::{ValhallaClient, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
pub use error::{Error, Result};
// Status codes appear in `Error::BackendStatus`; re-exported so consumers
// can match on them without depending on reqwest themselves.
pub use reqwest::StatusCode;
pub use types::{Coordinate, DirectionsOptions, MatrixPayload, RoutePayload, DEFAULT_COSTING, DEFAULT_UNITS};
