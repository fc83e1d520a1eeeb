//! Utility functions shared by the store implementations.
//!
//! - [`document_id`] - Opaque document identifier generation
//! - [`db_error`] - Classification of database errors

pub mod db_error;
pub mod document_id;
