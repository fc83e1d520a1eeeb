//! API route groups.
//!
//! Each group is a self-contained [`Router`] mounted by
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    create_donation_alt_handler, create_donation_handler, donation_expiry_handler,
    list_donations_handler, register_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Canonical donation routes.
///
/// # Endpoints
///
/// - `POST /donations` - Record a donation (201 Created)
/// - `GET  /donations` - List donations, optionally filtered by `provider`
/// - `GET  /donations/{id}/expiry` - Predicted remaining shelf life
pub fn donation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/donations",
            get(list_donations_handler).post(create_donation_handler),
        )
        .route("/donations/{id}/expiry", get(donation_expiry_handler))
}

/// Donations group, mounted under a prefix.
///
/// # Endpoints
///
/// - `POST /` - Record a donation (200 OK)
/// - `GET  /` - List donations
/// - `GET  /{id}/expiry` - Predicted remaining shelf life
pub fn donations_group() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_donations_handler).post(create_donation_alt_handler),
        )
        .route("/{id}/expiry", get(donation_expiry_handler))
}

/// Admin group.
///
/// # Endpoints
///
/// - `GET /stats` - Donation count and total quantity
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats_handler))
}

/// Auth group.
///
/// # Endpoints
///
/// - `POST /register` - Register a user
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/register", post(register_handler))
}
