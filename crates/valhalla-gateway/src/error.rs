//! Error responses for the gateway endpoints.
//!
//! Failures carry a typed kind and are mapped to HTTP statuses through an
//! explicit table instead of a single catch-all status:
//!
//! | kind | status |
//! |---|---|
//! | invalid request body | 400 Bad Request |
//! | backend unreachable | 502 Bad Gateway |
//! | backend non-2xx reply | 500 Internal Server Error |
//! | undecodable backend reply | 500 Internal Server Error |
//!
//! Every failure serializes to the same wire shape, `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use valhalla_client::Error as ClientError;

/// JSON body returned for every gateway failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message naming the underlying failure.
    pub error: String,
}

/// Failures surfaced by the gateway handlers.
#[derive(Debug)]
pub enum GatewayError {
    /// The inbound body was not valid JSON or had wrongly-typed fields.
    InvalidBody(String),

    /// The backend client failed; the variant of the inner error decides the
    /// response status.
    Backend(ClientError),
}

impl GatewayError {
    /// The response status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::Backend(ClientError::BackendUnavailable { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Backend(ClientError::BackendStatus { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Backend(ClientError::MalformedResponse { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Backend(ClientError::ClientBuild(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Failure label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            GatewayError::InvalidBody(_) => "invalid_body",
            GatewayError::Backend(ClientError::BackendUnavailable { .. }) => "backend_unavailable",
            GatewayError::Backend(ClientError::BackendStatus { .. }) => "backend_status",
            GatewayError::Backend(ClientError::MalformedResponse { .. }) => "malformed_response",
            GatewayError::Backend(ClientError::ClientBuild(_)) => "internal",
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::InvalidBody(msg) => write!(f, "invalid request body: {}", msg),
            GatewayError::Backend(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::InvalidBody(_) => None,
            GatewayError::Backend(err) => Some(err),
        }
    }
}

impl From<ClientError> for GatewayError {
    fn from(err: ClientError) -> Self {
        GatewayError::Backend(err)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
