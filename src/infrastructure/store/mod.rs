//! Document store implementations.
//!
//! # Stores
//!
//! - [`PgDocumentStore`] - Records as JSONB rows in PostgreSQL
//! - [`MemoryDocumentStore`] - In-process store for tests and database-less runs

mod memory_document_store;
mod pg_document_store;

pub use memory_document_store::MemoryDocumentStore;
pub use pg_document_store::PgDocumentStore;
