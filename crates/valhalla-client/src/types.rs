//! Wire types shared between the gateway and the Valhalla backend.

use serde::{Deserialize, Serialize};

/// Costing model applied when a request does not specify one.
pub const DEFAULT_COSTING: &str = "auto";

/// Distance units applied when a request does not specify them.
pub const DEFAULT_UNITS: &str = "kilometers";

/// A geographic point.
///
/// Serialized exactly as `{"lat": …, "lon": …}` on both the inbound and the
/// outbound wire. No range validation happens here; out-of-range coordinates
/// are rejected by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Nested units option carried by every Valhalla payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsOptions {
    pub units: String,
}

/// Wire shape for `POST {base_url}/route`.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePayload {
    pub locations: Vec<Coordinate>,
    pub costing: String,
    pub directions_options: DirectionsOptions,
}

impl RoutePayload {
    pub fn new(locations: &[Coordinate], costing: &str, units: &str) -> Self {
        Self {
            locations: locations.to_vec(),
            costing: costing.to_string(),
            directions_options: DirectionsOptions {
                units: units.to_string(),
            },
        }
    }
}

/// Wire shape for `POST {base_url}/matrix`.
///
/// Valhalla requires both lists; an absent target list means a matrix among
/// the sources only, so [`MatrixPayload::new`] resolves `None` to a copy of
/// `sources` before anything goes on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixPayload {
    pub sources: Vec<Coordinate>,
    pub targets: Vec<Coordinate>,
    pub costing: String,
    pub directions_options: DirectionsOptions,
}

impl MatrixPayload {
    pub fn new(
        sources: &[Coordinate],
        targets: Option<&[Coordinate]>,
        costing: &str,
        units: &str,
    ) -> Self {
        Self {
            sources: sources.to_vec(),
            targets: targets.unwrap_or(sources).to_vec(),
            costing: costing.to_string(),
            directions_options: DirectionsOptions {
                units: units.to_string(),
            },
        }
    }
}
