//! Domain layer containing business entities and the persistence contract.
//!
//! # Architecture
//!
//! - [`entities`] - Schemaless records, collections, and aggregate views
//! - [`repositories`] - The [`repositories::DocumentStore`] trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait is implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
