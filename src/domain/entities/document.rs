//! Schemaless record entity.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Record body: an open mapping from field names to JSON values.
pub type Document = Map<String, Value>;

/// Opaque identifier assigned by the store at creation time.
pub type DocumentId = String;

/// Reserved key under which the identifier is merged into returned records.
pub const ID_FIELD: &str = "id";

/// A record as held by the store.
///
/// The identifier and the body are kept apart; they are only merged when the
/// record is handed back to a caller (see [`StoredDocument::into_record`]).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Document,
    pub created_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Creates a new StoredDocument instance.
    pub fn new(id: DocumentId, body: Document, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            body,
            created_at,
        }
    }

    /// Returns a string field of the body, if present and a string.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(Value::as_str)
    }

    /// Consumes the record and returns its body with `id` merged in.
    ///
    /// An `id` field submitted by the caller is shadowed by the assigned identifier.
    pub fn into_record(self) -> Document {
        let mut record = self.body;
        record.insert(ID_FIELD.to_string(), Value::String(self.id));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_into_record_merges_id() {
        let doc = StoredDocument::new(
            "abc123".to_string(),
            body(json!({ "providerName": "Cafe", "quantity": 3 })),
            Utc::now(),
        );

        let record = doc.into_record();

        assert_eq!(record["id"], "abc123");
        assert_eq!(record["providerName"], "Cafe");
        assert_eq!(record["quantity"], 3);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_into_record_overrides_caller_id() {
        let doc = StoredDocument::new(
            "assigned".to_string(),
            body(json!({ "id": "caller-chosen" })),
            Utc::now(),
        );

        assert_eq!(doc.into_record()["id"], "assigned");
    }

    #[test]
    fn test_str_field() {
        let doc = StoredDocument::new(
            "x".to_string(),
            body(json!({ "providerName": "Bakery", "quantity": 4 })),
            Utc::now(),
        );

        assert_eq!(doc.str_field("providerName"), Some("Bakery"));
        assert_eq!(doc.str_field("quantity"), None);
        assert_eq!(doc.str_field("missing"), None);
    }
}
