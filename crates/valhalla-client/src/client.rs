//! HTTP client for a Valhalla routing engine instance.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Coordinate, MatrixPayload, RoutePayload};

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "VALHALLA_URL";

/// Environment variable overriding the outbound request timeout in seconds.
pub const TIMEOUT_ENV: &str = "VALHALLA_TIMEOUT_SECS";

/// Base URL used when neither an override nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the route and matrix endpoints of a Valhalla backend.
///
/// The base URL and timeout are resolved once at construction and are
/// immutable for the lifetime of the client. The client performs no retries;
/// every failure is reported to the caller as an [`Error`].
#[derive(Debug, Clone)]
pub struct ValhallaClient {
    base_url: String,
    http: Client,
}

impl ValhallaClient {
    /// Construct a client against an explicit base URL with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Construct a client against an explicit base URL and timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            base_url: normalize_base_url(base_url.into()),
            http,
        })
    }

    /// Construct a client from the environment.
    ///
    /// The base URL comes from `VALHALLA_URL` (default
    /// `http://localhost:8080`) and the timeout from `VALHALLA_TIMEOUT_SECS`
    /// (default 30).
    pub fn from_env() -> Result<Self> {
        let base_url = resolve_base_url(env::var(BASE_URL_ENV).ok());
        let timeout = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(base_url, Duration::from_secs(timeout))
    }

    /// The resolved backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a route through the given stops.
    ///
    /// An empty or single-element `locations` list is forwarded as-is; the
    /// backend is responsible for rejecting lists too short to route.
    pub async fn route(
        &self,
        locations: &[Coordinate],
        costing: &str,
        units: &str,
    ) -> Result<Value> {
        let payload = RoutePayload::new(locations, costing, units);
        self.post_json("route", &payload).await
    }

    /// Request a distance matrix between `sources` and `targets`.
    ///
    /// When `targets` is `None` the matrix is computed among `sources` only.
    pub async fn matrix(
        &self,
        sources: &[Coordinate],
        targets: Option<&[Coordinate]>,
        costing: &str,
        units: &str,
    ) -> Result<Value> {
        let payload = MatrixPayload::new(sources, targets, costing, units);
        self.post_json("matrix", &payload).await
    }

    /// POST `payload` to `{base_url}/{endpoint}` and decode the JSON reply.
    ///
    /// The decoded body is returned as an opaque [`Value`]; this client never
    /// interprets trip or matrix contents.
    async fn post_json<P: Serialize>(&self, endpoint: &str, payload: &P) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "posting to valhalla backend");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|source| Error::BackendUnavailable {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::BackendStatus { status, body });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| Error::MalformedResponse { source })
    }
}

/// Pick the backend base URL from an optional environment value.
fn resolve_base_url(env_url: Option<String>) -> String {
    match env_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Trailing slashes are trimmed so URL joining stays deterministic.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn user_agent() -> String {
    format!("valhalla-client/{}", env!("CARGO_PKG_VERSION"))
}
