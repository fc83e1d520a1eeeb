#![allow(dead_code)]

use food_rescue::domain::entities::{Collection, Document};
use food_rescue::domain::repositories::DocumentStore;
use food_rescue::infrastructure::store::MemoryDocumentStore;
use food_rescue::state::AppState;
use serde_json::Value;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState::new(store.clone());
    (state, store)
}

pub fn object(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub async fn seed_donation(store: &MemoryDocumentStore, donation: Value) -> String {
    store
        .append(Collection::Donations, object(donation))
        .await
        .unwrap()
}
