//! Data Transfer Objects for API requests and responses.
//!
//! Record bodies themselves are schemaless and travel as
//! [`crate::domain::entities::Document`]; the DTOs here cover the fixed-shape
//! envelopes around them.

pub mod donations;
pub mod health;
pub mod message;
pub mod stats;
