//! Application layer services implementing business logic.
//!
//! Services translate one request into one call on the injected
//! [`crate::domain::repositories::DocumentStore`] and shape the result.
//!
//! # Available Services
//!
//! - [`services::donation_service::DonationService`] - Donation intake, listing and expiry prediction
//! - [`services::admin_service::AdminService`] - Donation aggregation
//! - [`services::user_service::UserService`] - User registration

pub mod services;
