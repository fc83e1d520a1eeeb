//! Handler for admin donation statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the number of donations and the sum of their quantities.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// { "total_donations": 4, "total_kg": 15.5 }
/// ```
///
/// A donation without a numeric `quantity` still counts towards
/// `total_donations` and adds nothing to `total_kg`.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.admin_service.donation_stats().await?;
    Ok(Json(stats.into()))
}
