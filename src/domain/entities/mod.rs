//! Core domain entities representing the business data model.
//!
//! Records are schemaless: any JSON object submitted by a caller is stored as-is.
//! The store assigns each record an opaque identifier that lives next to the body,
//! never inside it.
//!
//! # Entity Types
//!
//! - [`Document`] - A schemaless record body (JSON object)
//! - [`StoredDocument`] - A record body together with its assigned identifier
//! - [`Collection`] - A named set of records of one kind
//! - [`DonationStats`] - Aggregate view over the donations collection
//! - [`ExpiryPrediction`] - Estimated remaining shelf life of a donation

pub mod collection;
pub mod document;
pub mod donation_stats;
pub mod expiry;

pub use collection::Collection;
pub use document::{Document, DocumentId, ID_FIELD, StoredDocument};
pub use donation_stats::DonationStats;
pub use expiry::{ExpiryFactor, ExpiryPrediction, StorageCondition, Urgency};
