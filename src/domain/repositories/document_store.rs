//! Document store contract.

use crate::domain::entities::{Collection, Document, DocumentId, StoredDocument};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence collaborator holding schemaless records in named collections.
///
/// Calls are independent round trips. No ordering, atomicity, or snapshot
/// isolation is promised across calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::PgDocumentStore`] - PostgreSQL (JSONB) implementation
/// - [`crate::infrastructure::store::MemoryDocumentStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends a record verbatim and returns its newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable or rejects the write.
    async fn append(&self, collection: Collection, record: Document)
    -> Result<DocumentId, AppError>;

    /// Reads every record currently in the collection.
    ///
    /// Order follows the store's iteration order and is not guaranteed to be
    /// stable across calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn stream_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, AppError>;

    /// Reports whether the store currently answers requests.
    async fn health_check(&self) -> bool;
}
