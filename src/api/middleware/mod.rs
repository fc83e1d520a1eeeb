//! HTTP middleware applied around every route.

pub mod cors;
pub mod tracing;
