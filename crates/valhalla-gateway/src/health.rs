//! Health check handlers for Kubernetes probes.
//!
//! The gateway holds no loadable state, so both probes return 200 once the
//! process is serving. The readiness payload reports the configured backend
//! URL so operators can spot a misconfigured `VALHALLA_URL` at a glance; the
//! backend itself is not pinged, a dead backend surfaces per-request instead.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, "ok" when serving.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Configured backend base URL (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            backend_url: None,
        }
    }

    /// Create a ready status carrying the backend URL.
    pub fn ready(service: &str, version: &str, backend_url: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            backend_url: Some(backend_url.to_string()),
        }
    }
}

/// Liveness probe handler.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.client().base_url(),
    );
    (StatusCode::OK, Json(status))
}
