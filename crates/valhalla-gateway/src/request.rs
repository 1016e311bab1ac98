//! Inbound request types for the gateway endpoints.
//!
//! Missing fields are permissive: absent coordinate lists deserialize to
//! empty sequences (the backend rejects lists too short to use) and absent
//! `costing`/`units` take the Valhalla defaults. Bodies that are not valid
//! JSON, or whose fields have the wrong type, are rejected at the extractor
//! boundary instead.

use serde::{Deserialize, Serialize};

use valhalla_client::{Coordinate, DEFAULT_COSTING, DEFAULT_UNITS};

fn default_costing() -> String {
    DEFAULT_COSTING.to_string()
}

fn default_units() -> String {
    DEFAULT_UNITS.to_string()
}

/// Body of `POST /route`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Ordered stops of the requested route.
    #[serde(default)]
    pub locations: Vec<Coordinate>,

    /// Valhalla costing model, e.g. "auto" or "bicycle".
    #[serde(default = "default_costing")]
    pub costing: String,

    /// Distance units returned by the backend.
    #[serde(default = "default_units")]
    pub units: String,
}

/// Body of `POST /matrix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRequest {
    /// Source coordinates of the matrix.
    #[serde(default)]
    pub sources: Vec<Coordinate>,

    /// Target coordinates; when absent the matrix is computed among the
    /// sources only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Coordinate>>,

    /// Valhalla costing model, e.g. "auto" or "bicycle".
    #[serde(default = "default_costing")]
    pub costing: String,

    /// Distance units returned by the backend.
    #[serde(default = "default_units")]
    pub units: String,
}
