//! Repository trait definitions for the domain layer.
//!
//! The persistence collaborator is modelled as a document store with two
//! operations: append a record to a named collection, and read back every
//! record of a collection.
//!
//! # Architecture
//!
//! - Implementations live in `crate::infrastructure::store`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod document_store;

pub use document_store::DocumentStore;

#[cfg(test)]
pub use document_store::MockDocumentStore;
