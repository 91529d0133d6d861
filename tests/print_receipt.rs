//! End-to-end tests for the print endpoint.
//!
//! Simulation tests write to a temp artifact; production tests run
//! against a local stub of the PrintNode print-jobs endpoint that
//! captures the submitted job. The original upstream service composed a
//! second, divergent receipt for simulation mode; that behavior is
//! deliberately not reproduced here, so both modes are asserted against
//! the same composition.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::post,
};
use axum_test::TestServer;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use recibo::{
    Config, PrintMode,
    order::{Order, SAMPLE_ORDER},
    receipt,
    server::{AppState, router},
};

fn make_server(config: Config) -> TestServer {
    let app = router(Arc::new(AppState::new(config)));
    TestServer::new(app)
}

fn simulation_config(artifact: PathBuf) -> Config {
    Config {
        mode: PrintMode::Simulation,
        printnode_api_key: String::new(),
        printer_id: String::new(),
        port: 0,
        // Unreachable on purpose; simulation mode must never call out.
        printnode_api_url: "http://127.0.0.1:9".to_string(),
        simulation_log_file: artifact,
    }
}

fn production_config(relay_url: String) -> Config {
    Config {
        mode: PrintMode::Production,
        printnode_api_key: "test-key".to_string(),
        printer_id: "72001234".to_string(),
        port: 0,
        printnode_api_url: relay_url,
        simulation_log_file: PathBuf::from("unused.log"),
    }
}

fn sample_body() -> Value {
    let order: Value = serde_json::from_str(SAMPLE_ORDER).unwrap();
    json!({ "data": order })
}

// ==========================================================================
// Request validation
// ==========================================================================

#[tokio::test]
async fn test_missing_data_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = make_server(simulation_config(dir.path().join("receipt.log")));

    let response = server.post("/print-receipt").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Bad Request", "message": "Order data is required" })
    );
}

#[tokio::test]
async fn test_null_data_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = make_server(simulation_config(dir.path().join("receipt.log")));

    let response = server
        .post("/print-receipt")
        .json(&json!({ "data": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Order data is required");
}

#[tokio::test]
async fn test_malformed_order_returns_500_with_mode() {
    let dir = tempfile::tempdir().unwrap();
    let server = make_server(simulation_config(dir.path().join("receipt.log")));

    let mut body = sample_body();
    body["data"].as_object_mut().unwrap().remove("customerDetails");

    let response = server.post("/print-receipt").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Printing Failed");
    assert_eq!(json["mode"], "SIMULATION");
    assert!(json["message"].as_str().unwrap().contains("customerDetails"));
}

// ==========================================================================
// Simulation mode
// ==========================================================================

#[tokio::test]
async fn test_simulation_success_returns_artifact_text() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("receipt.log");
    let server = make_server(simulation_config(artifact.clone()));

    let response = server.post("/print-receipt").json(&sample_body()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Simulation successful");

    let receipt_text = json["receipt"].as_str().unwrap();
    assert!(receipt_text.contains("**Mario's Pizzeria**"));
    assert!(receipt_text.ends_with("=== CUT HERE ==="));

    // The response body is the artifact's read-back content.
    let on_disk = std::fs::read_to_string(&artifact).unwrap();
    assert_eq!(receipt_text, on_disk);
}

#[tokio::test]
async fn test_second_simulation_overwrites_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let server = make_server(simulation_config(dir.path().join("receipt.log")));

    server.post("/print-receipt").json(&sample_body()).await;

    let mut second = sample_body();
    second["data"]["orderNumber"] = json!("10999");
    let response = server.post("/print-receipt").json(&second).await;

    let receipt_text = response.json::<Value>()["receipt"].as_str().unwrap().to_string();
    assert!(receipt_text.contains("Order #: 10999"));
    assert!(!receipt_text.contains("Order #: 10423"));
    // One receipt, not a concatenation of both.
    assert_eq!(receipt_text.matches("=== CUT HERE ===").count(), 1);
}

#[tokio::test]
async fn test_simulation_storage_failure_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    // Parent directory does not exist, so the write fails.
    let server = make_server(simulation_config(dir.path().join("missing").join("receipt.log")));

    let response = server.post("/print-receipt").json(&sample_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Printing Failed");
    assert_eq!(json["mode"], "SIMULATION");
}

// ==========================================================================
// Production mode, against a stub relay
// ==========================================================================

#[derive(Debug)]
struct CapturedJob {
    auth: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct StubState {
    captured: Arc<Mutex<Option<CapturedJob>>>,
    status: StatusCode,
}

async fn stub_printjobs(
    State(stub): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *stub.captured.lock().await = Some(CapturedJob { auth, body });

    if stub.status.is_success() {
        (stub.status, Json(json!({ "id": 4321 }))).into_response()
    } else {
        (stub.status, Json(json!({ "message": "printer offline" }))).into_response()
    }
}

/// Spawn a stub relay on an ephemeral port, returning its base URL and
/// the captured-request slot.
async fn spawn_stub_relay(status: StatusCode) -> (String, Arc<Mutex<Option<CapturedJob>>>) {
    let captured = Arc::new(Mutex::new(None));
    let state = StubState {
        captured: captured.clone(),
        status,
    };
    let app = Router::new()
        .route("/printjobs", post(stub_printjobs))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

#[tokio::test]
async fn test_production_dispatch_submits_expected_job() {
    let (relay_url, captured) = spawn_stub_relay(StatusCode::CREATED).await;
    let server = make_server(production_config(relay_url));

    let response = server.post("/print-receipt").json(&sample_body()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "success": true,
            "message": "Sent to printer via PrintNode",
            "jobId": 4321,
        })
    );

    let captured = captured.lock().await;
    let job = captured.as_ref().expect("relay received no job");

    // Basic auth: api key as username, empty password.
    assert_eq!(
        job.auth.as_deref(),
        Some(format!("Basic {}", STANDARD.encode("test-key:")).as_str())
    );

    assert_eq!(job.body["printerId"], "72001234");
    assert_eq!(job.body["title"], "Order Receipt");
    assert_eq!(job.body["contentType"], "raw_base64");

    // Content is the composed text plus the ESC/POS cut command.
    let order: Order = serde_json::from_str(SAMPLE_ORDER).unwrap();
    let expected = STANDARD.encode(receipt::compose(&order).to_bytes());
    assert_eq!(job.body["content"], expected);
}

#[tokio::test]
async fn test_production_relay_failure_returns_500() {
    let (relay_url, _captured) = spawn_stub_relay(StatusCode::BAD_GATEWAY).await;
    let server = make_server(production_config(relay_url));

    let response = server.post("/print-receipt").json(&sample_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Printing Failed");
    assert_eq!(json["mode"], "PRODUCTION");
    assert!(json["message"].as_str().unwrap().contains("502"));
}

#[tokio::test]
async fn test_production_unreachable_relay_returns_500() {
    // Nothing listens on this port.
    let server = make_server(production_config("http://127.0.0.1:9".to_string()));

    let response = server.post("/print-receipt").json(&sample_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["mode"], "PRODUCTION");
}
