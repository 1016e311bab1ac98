//! Router assembly and request handlers.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::error::GatewayError;
use crate::health::{health_live, health_ready};
use crate::metrics::{metrics_handler, record_request_failed, record_request_proxied};
use crate::middleware::extract_or_generate_request_id;
use crate::request::{MatrixRequest, RouteRequest};
use crate::state::AppState;

/// Build the gateway router with all routes and layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/route", post(route_handler))
        .route("/matrix", post(matrix_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle `POST /route`.
///
/// The backend's JSON body is returned verbatim on success; failures are
/// mapped to statuses by [`GatewayError`].
async fn route_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<Value>, GatewayError> {
    let request_id = extract_or_generate_request_id(&headers);

    let Json(request) = body.map_err(|rejection| {
        record_request_failed("route", "invalid_body");
        GatewayError::InvalidBody(rejection.body_text())
    })?;

    info!(
        request_id = %request_id,
        locations = request.locations.len(),
        costing = %request.costing,
        units = %request.units,
        "handling route request"
    );

    match state
        .client()
        .route(&request.locations, &request.costing, &request.units)
        .await
    {
        Ok(body) => {
            record_request_proxied("route");
            info!(request_id = %request_id, "route request proxied");
            Ok(Json(body))
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "route request failed");
            let err = GatewayError::Backend(e);
            record_request_failed("route", err.reason());
            Err(err)
        }
    }
}

/// Handle `POST /matrix`.
///
/// When the body omits `targets` the client computes the matrix among the
/// sources only.
async fn matrix_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<MatrixRequest>, JsonRejection>,
) -> Result<Json<Value>, GatewayError> {
    let request_id = extract_or_generate_request_id(&headers);

    let Json(request) = body.map_err(|rejection| {
        record_request_failed("matrix", "invalid_body");
        GatewayError::InvalidBody(rejection.body_text())
    })?;

    info!(
        request_id = %request_id,
        sources = request.sources.len(),
        targets = request.targets.as_ref().map(|t| t.len()),
        costing = %request.costing,
        units = %request.units,
        "handling matrix request"
    );

    match state
        .client()
        .matrix(
            &request.sources,
            request.targets.as_deref(),
            &request.costing,
            &request.units,
        )
        .await
    {
        Ok(body) => {
            record_request_proxied("matrix");
            info!(request_id = %request_id, "matrix request proxied");
            Ok(Json(body))
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "matrix request failed");
            let err = GatewayError::Backend(e);
            record_request_failed("matrix", err.reason());
            Err(err)
        }
    }
}
