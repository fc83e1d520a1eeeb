//! Infrastructure layer for external integrations.
//!
//! This layer implements the document store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - PostgreSQL and in-process document stores

pub mod store;
