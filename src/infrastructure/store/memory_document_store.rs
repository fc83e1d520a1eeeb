//! In-process document store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Collection, Document, DocumentId, StoredDocument};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;
use crate::utils::document_id::generate_document_id;

/// A document store kept entirely in process memory.
///
/// Records are returned in insertion order and are lost when the process exits.
///
/// # Use Cases
///
/// - Handler and routing tests without a database
/// - Local development with `STORE_BACKEND=memory`
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryDocumentStore (records are not persisted)");
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn append(
        &self,
        collection: Collection,
        record: Document,
    ) -> Result<DocumentId, AppError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();

        let mut id = generate_document_id();
        while docs.iter().any(|doc| doc.id == id) {
            id = generate_document_id();
        }

        docs.push(StoredDocument::new(id.clone(), record, Utc::now()));
        Ok(id)
    }

    async fn stream_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
