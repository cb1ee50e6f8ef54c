#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sitetrack_api::config::ServerConfig;
use sitetrack_api::router::build_app_router;
use sitetrack_api::state::AppState;
use sitetrack_db::{LatencyProfile, Store};

/// A test `ServerConfig` with no simulated latency.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_dir: PathBuf::from("seed"),
        latency: LatencyProfile::none(),
    }
}

pub fn test_state(store: Store) -> AppState {
    AppState::new(store, test_config())
}

/// Full application router over the given state, with the production
/// middleware stack.
pub fn build_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

/// Full application router over an empty store.
pub fn build_test_app() -> Router {
    build_app(test_state(Store::empty()))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture payloads
// ---------------------------------------------------------------------------

pub fn project_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "location": "Portland, OR",
        "clientName": "Northwind Development",
        "startDate": "2025-03-01",
        "endDate": "2025-12-31",
        "totalBudget": 1000000.0
    })
}

pub fn task_json(name: &str, phase: (i64, &str), assignee: (i64, &str), due: &str) -> serde_json::Value {
    serde_json::json!({
        "projectId": 1,
        "phaseId": phase.0,
        "phaseName": phase.1,
        "name": name,
        "dueDate": due,
        "assigneeId": assignee.0,
        "assigneeName": assignee.1
    })
}

pub fn material_json(name: &str, in_stock: u32, reorder: u32) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": "Structural",
        "unit": "tons",
        "quantityInStock": in_stock,
        "reorderLevel": reorder,
        "unitCost": 850.0,
        "supplier": "Cascade Steel"
    })
}
