/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ftx-adapter tests

use ftx_adapter::{ClientConfig, Credentials, FtxClient, RequestSigner};
use reqwest::Method;
use serde_json::{Value, json};
use wiremock::{MockServer, Request, ResponseTemplate};

pub const API_KEY: &str = "integration-key";
pub const API_SECRET: &str = "integration-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(format!("{}/api", server.uri()))
}

/// Client with test credentials rooted at `{server}/api`
pub fn signed_client(server: &MockServer) -> FtxClient {
    FtxClient::with_credentials(config_for(server), Credentials::new(API_KEY, API_SECRET))
        .expect("client init")
}

pub fn success(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "result": result }))
}

pub fn failure(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": false, "error": message }))
}

/// Recompute the signature a received request should carry
#[allow(dead_code)]
pub fn expected_signature(request: &Request) -> String {
    let timestamp = request
        .headers
        .get("ftx-ts")
        .and_then(|value| value.to_str().ok())
        .expect("ftx-ts header");
    let method = Method::from_bytes(request.method.as_str().as_bytes()).expect("method");
    let request_path = match request.url.query() {
        Some(query) => format!("{}?{query}", request.url.path()),
        None => request.url.path().to_string(),
    };
    let body = (!request.body.is_empty()).then_some(request.body.as_slice());
    RequestSigner::new(API_SECRET).sign(timestamp, &method, &request_path, body)
}

#[allow(dead_code)]
pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

#[allow(dead_code)]
pub fn order_json(id: i64, client_id: &str) -> Value {
    json!({
        "id": id,
        "market": "BTC-PERP",
        "type": "limit",
        "side": "buy",
        "price": 30000.0,
        "size": 0.01,
        "filledSize": 0.0,
        "remainingSize": 0.01,
        "avgFillPrice": null,
        "status": "new",
        "createdAt": "2021-01-07T06:13:20.000000+00:00",
        "reduceOnly": false,
        "ioc": false,
        "postOnly": false,
        "future": "BTC-PERP",
        "clientId": client_id
    })
}
