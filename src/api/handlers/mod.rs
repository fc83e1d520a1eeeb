//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod donations;
pub mod health;
pub mod home;
pub mod register;
pub mod stats;

pub use donations::{
    create_donation_alt_handler, create_donation_handler, donation_expiry_handler,
    list_donations_handler,
};
pub use health::health_handler;
pub use home::home_handler;
pub use register::register_handler;
pub use stats::stats_handler;
