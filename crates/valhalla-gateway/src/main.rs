//! Valhalla gateway HTTP service.
//!
//! A thin proxy that shapes public JSON requests into Valhalla's wire format
//! and relays the backend's responses verbatim.
//!
//! # Endpoints
//!
//! - `POST /route` - Forward a routing request to the backend
//! - `POST /matrix` - Forward a distance-matrix request to the backend
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `VALHALLA_URL` - Backend base URL (default: http://localhost:8080)
//! - `VALHALLA_TIMEOUT_SECS` - Outbound request timeout (default: 30)
//! - `SERVICE_PORT` - HTTP port (default: 5000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::info;

use valhalla_client::ValhallaClient;
use valhalla_gateway::{app, init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("gateway");
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let client = ValhallaClient::from_env()?;
    info!(
        backend_url = %client.base_url(),
        port = port,
        "starting valhalla gateway"
    );

    // Build the router with the client injected as shared state
    let app = app(AppState::new(client));

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
