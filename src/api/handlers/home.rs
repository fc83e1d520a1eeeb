//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::health::HomeResponse;

/// Liveness message reported at `/`.
pub const HOME_STATUS: &str = "FoodRescue backend running ✅";

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /`
///
/// Does not touch the store; see [`super::health_handler`] for that.
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        status: HOME_STATUS.to_string(),
    })
}
