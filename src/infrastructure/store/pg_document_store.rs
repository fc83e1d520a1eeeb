//! PostgreSQL implementation of the document store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Collection, Document, DocumentId, StoredDocument};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_id;
use crate::utils::document_id::generate_document_id;

/// Attempts at allocating a fresh identifier before giving up.
const MAX_ID_ATTEMPTS: usize = 5;

/// PostgreSQL document store.
///
/// Every record is one row of the `documents` table, keyed by its opaque
/// identifier. The body is kept as serialized JSON text: `jsonb` would reject
/// `\u0000` in strings and reorder keys.
pub struct PgDocumentStore {
    pool: Arc<PgPool>,
}

impl PgDocumentStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for StoredDocument {
    type Error = AppError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let body = match serde_json::from_str::<Value>(&row.body) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!(id = %row.id, kind = ?other, "Stored body is not an object");
                Document::new()
            }
            Err(e) => {
                tracing::error!(id = %row.id, error = %e, "Stored body is not valid JSON");
                return Err(AppError::internal(
                    "Corrupt document body",
                    json!({ "id": row.id }),
                ));
            }
        };

        Ok(StoredDocument::new(row.id, body, row.created_at))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn append(
        &self,
        collection: Collection,
        record: Document,
    ) -> Result<DocumentId, AppError> {
        let body = serde_json::to_string(&record).map_err(|e| {
            AppError::internal("Failed to encode document", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = generate_document_id();

            let result = sqlx::query(
                r#"
                INSERT INTO documents (id, collection, body)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&id)
            .bind(collection.as_str())
            .bind(&body)
            .execute(self.pool.as_ref())
            .await;

            match result {
                Ok(_) => return Ok(id),
                Err(e) if is_unique_violation_on_id(&e) => {
                    tracing::warn!(attempt, "Document id collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to allocate document id",
            json!({ "attempts": MAX_ID_ATTEMPTS }),
        ))
    }

    async fn stream_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, AppError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at
            FROM documents
            WHERE collection = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(collection.as_str())
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(StoredDocument::try_from).collect()
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
