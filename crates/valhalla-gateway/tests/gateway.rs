//! End-to-end tests for the gateway router against a mocked Valhalla backend.

use axum_test::TestServer;
use serde_json::{json, Value};
use valhalla_client::ValhallaClient;
use valhalla_gateway::{app, AppState};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(backend_url: &str) -> TestServer {
    let client = ValhallaClient::new(backend_url).expect("client should build");
    TestServer::new(app(AppState::new(client))).expect("test server should start")
}

#[tokio::test]
async fn route_passes_backend_body_through_verbatim() {
    let backend = MockServer::start().await;
    let trip = json!({
        "trip": {
            "summary": {"length": 2.5, "time": 300},
            "status": 0,
            "units": "kilometers"
        }
    });

    Mock::given(method("POST"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trip.clone()))
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/route")
        .json(&json!({
            "locations": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), trip);
}

#[tokio::test]
async fn route_applies_default_costing_and_units() {
    let backend = MockServer::start().await;

    // The mock only answers the exact outbound payload with defaults filled
    // in, so a wrong payload fails the test with a 500 from the 404 reply.
    Mock::given(method("POST"))
        .and(path("/route"))
        .and(body_json(json!({
            "locations": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ],
            "costing": "auto",
            "directions_options": {"units": "kilometers"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"trip": {}})))
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/route")
        .json(&json!({
            "locations": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ]
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn route_forwards_explicit_costing_and_units() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .and(body_json(json!({
            "locations": [{"lat": 1.0, "lon": 2.0}],
            "costing": "bicycle",
            "directions_options": {"units": "miles"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"trip": {}})))
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/route")
        .json(&json!({
            "locations": [{"lat": 1.0, "lon": 2.0}],
            "costing": "bicycle",
            "units": "miles"
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn matrix_defaults_targets_to_sources() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/matrix"))
        .and(body_json(json!({
            "sources": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ],
            "targets": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ],
            "costing": "auto",
            "directions_options": {"units": "kilometers"},
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"sources_to_targets": [[]]})),
        )
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/matrix")
        .json(&json!({
            "sources": [
                {"lat": 44.787197, "lon": 20.457273},
                {"lat": 44.804010, "lon": 20.465130},
            ]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"sources_to_targets": [[]]})
    );
}

#[tokio::test]
async fn matrix_forwards_explicit_targets() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/matrix"))
        .and(body_json(json!({
            "sources": [{"lat": 1.0, "lon": 2.0}],
            "targets": [{"lat": 3.0, "lon": 4.0}],
            "costing": "auto",
            "directions_options": {"units": "kilometers"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/matrix")
        .json(&json!({
            "sources": [{"lat": 1.0, "lon": 2.0}],
            "targets": [{"lat": 3.0, "lon": 4.0}]
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn backend_error_status_surfaces_as_500_with_error_body() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server
        .post("/route")
        .json(&json!({"locations": [{"lat": 1.0, "lon": 2.0}]}))
        .await;

    response.assert_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    let message = body["error"].as_str().expect("error field should be a string");
    assert!(!message.is_empty());
    assert!(message.contains("503"));
    assert!(message.contains("overloaded"));
}

#[tokio::test]
async fn unreachable_backend_surfaces_as_502() {
    // Nothing listens on the discard port.
    let server = gateway_for("http://127.0.0.1:9");
    let response = server
        .post("/route")
        .json(&json!({"locations": [{"lat": 1.0, "lon": 2.0}]}))
        .await;

    response.assert_status(http::StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn malformed_json_body_is_rejected_with_400() {
    let backend = MockServer::start().await;
    let server = gateway_for(&backend.uri());

    let response = server
        .post("/route")
        .text("{\"locations\": [")
        .content_type("application/json")
        .await;

    response.assert_status(http::StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(!body["error"].as_str().unwrap().is_empty());

    // Nothing must reach the backend for a rejected body.
    assert!(backend.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn wrongly_typed_fields_are_rejected_with_400() {
    let backend = MockServer::start().await;
    let server = gateway_for(&backend.uri());

    let response = server
        .post("/matrix")
        .json(&json!({"sources": "not a list"}))
        .await;

    response.assert_status(http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_locations_are_forwarded_as_empty_list() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/route"))
        .and(body_json(json!({
            "locations": [],
            "costing": "auto",
            "directions_options": {"units": "kilometers"},
        })))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("at least two locations required"),
        )
        .mount(&backend)
        .await;

    let server = gateway_for(&backend.uri());
    let response = server.post("/route").json(&json!({})).await;

    // The backend's rejection of the empty list comes back as a gateway 500.
    response.assert_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("two locations"));
}

#[tokio::test]
async fn health_probes_answer_ok() {
    let server = gateway_for("http://localhost:8080");

    let live = server.get("/health/live").await;
    live.assert_status_ok();
    assert_eq!(live.json::<Value>()["status"], "ok");

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    let body = ready.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_url"], "http://localhost:8080");
}

#[tokio::test]
async fn metrics_endpoint_answers_text() {
    let server = gateway_for("http://localhost:8080");

    let response = server.get("/metrics").await;
    response.assert_status_ok();
}
