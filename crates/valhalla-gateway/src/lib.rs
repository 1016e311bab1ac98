//! HTTP gateway in front of a Valhalla routing engine.
//!
//! The gateway accepts untrusted JSON on `POST /route` and `POST /matrix`,
//! shapes it into backend-compatible requests, delegates to
//! [`valhalla_client::ValhallaClient`], and maps outcomes to HTTP responses.
//! The handlers follow a thin-handler pattern: all backend translation lives
//! in `valhalla-client`, this crate provides only HTTP glue:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  axum Handler                                              │
//! │  - Parse request JSON (fail fast with 400 on bad bodies)   │
//! │  - Call the Valhalla client                                │
//! │  - Pass successful bodies through verbatim                 │
//! │  - Map client errors to statuses via an explicit table     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backend response bodies are opaque to this crate; no field is stripped,
//! added, or renamed.

pub mod app;
pub mod error;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod request;
pub mod state;

pub use app::app;
pub use error::{ErrorBody, GatewayError};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{init_metrics, metrics_handler, MetricsConfig, MetricsError};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use request::{MatrixRequest, RouteRequest};
pub use state::AppState;
