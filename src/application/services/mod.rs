//! Business logic services for the application layer.

pub mod admin_service;
pub mod donation_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use donation_service::{DonationFilter, DonationService};
pub use user_service::UserService;
