//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Liveness message
//! - `GET  /health`          - Store health check
//! - `/donations`            - Donation intake, listing and `{id}/expiry` (create answers 201)
//! - `/api/donations`        - Donations group mount (create answers 200)
//! - `GET  /stats`           - Admin aggregation
//! - `POST /register`        - User registration
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method, and header
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, home_handler};
use crate::api::middleware::{cors, tracing};
use crate::api::routes::{admin_routes, auth_routes, donation_routes, donations_group};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Prefix of the donations group mount.
pub const DONATIONS_GROUP_PREFIX: &str = "/api/donations";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(donation_routes())
        .nest(DONATIONS_GROUP_PREFIX, donations_group())
        .merge(admin_routes())
        .merge(auth_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
