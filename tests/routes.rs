mod common;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use food_rescue::domain::entities::{Collection, Document, DocumentId, StoredDocument};
use food_rescue::domain::repositories::DocumentStore;
use food_rescue::error::AppError;
use food_rescue::routes::app_router;
use food_rescue::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn append(&self, _: Collection, _: Document) -> Result<DocumentId, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn stream_all(&self, _: Collection) -> Result<Vec<StoredDocument>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_home_route() {
    let (state, _store) = common::create_test_state();

    let (status, _, body) = send(state, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "FoodRescue backend running ✅" }));
}

#[tokio::test]
async fn test_canonical_and_group_mounts_share_records() {
    let (state, _store) = common::create_test_state();

    let (status, _, _) = send(
        state.clone(),
        post_json("/donations", json!({ "providerName": "A", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _, _) = send(
        state.clone(),
        post_json("/api/donations/", json!({ "providerName": "B", "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(state.clone(), get("/donations")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _, body) = send(state.clone(), get("/api/donations/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, _, body) = send(state, get("/stats")).await;
    assert_eq!(body, json!({ "total_donations": 2, "total_kg": 5 }));
}

#[tokio::test]
async fn test_register_route() {
    let (state, store) = common::create_test_state();

    let (status, _, body) = send(state, post_json("/register", json!({ "name": "NGO" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User registered" }));
    assert_eq!(store.stream_all(Collection::Users).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (state, _store) = common::create_test_state();
    let request = Request::builder()
        .uri("/donations")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (state, _store) = common::create_test_state();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/donations")
        .header(header::ORIGIN, "https://foodrescue.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(state, request).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_store_failure_surfaces_as_server_error() {
    let state = AppState::new(Arc::new(FailingStore));

    let (status, _, body) = send(state.clone(), get("/donations")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "internal_error");

    let (status, _, _) = send(state.clone(), get("/stats")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = send(state.clone(), post_json("/donations", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = send(state, post_json("/register", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (state, _store) = common::create_test_state();

    let (status, _, _) = send(state, get("/donations/extra/path")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_query_parameter_stays_json() {
    let (state, store) = common::create_test_state();
    common::seed_donation(&store, json!({ "providerName": "A" })).await;
    common::seed_donation(&store, json!({ "providerName": "B" })).await;

    let (status, headers, body) = send(state, get("/donations?provider=A&provider=B")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["providerName"], "A");
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let (state, store) = common::create_test_state();
    let note = "x".repeat(3 * 1024 * 1024);

    let (status, _, body) = send(state, post_json("/donations", json!({ "note": note }))).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "payload_too_large");
    assert!(store.stream_all(Collection::Donations).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_expiry_route_on_both_mounts() {
    let (state, store) = common::create_test_state();
    let id = common::seed_donation(&store, json!({ "type": "Frozen Peas" })).await;

    let (status, _, canonical) =
        send(state.clone(), get(&format!("/donations/{id}/expiry"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, group) = send(state, get(&format!("/api/donations/{id}/expiry"))).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(canonical["urgency"], group["urgency"]);
    assert_eq!(canonical["explanations"][0], group["explanations"][0]);
}
