//! Handlers for donation intake and listing.
//!
//! The same create and list behaviour is mounted twice: at `/donations` and
//! under the donations group at `/api/donations`. Only the success status of
//! create differs between the two mounts.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;

use crate::api::dto::donations::{DonationsQuery, ExpiryResponse};
use crate::api::dto::message::MessageResponse;
use crate::domain::entities::Document;
use crate::error::AppError;
use crate::state::AppState;

const DONATION_ADDED: &str = "Donation added";

/// Records a donation.
///
/// # Endpoint
///
/// `POST /donations`
///
/// # Request Body
///
/// Any JSON object. Conventionally carries `providerName` and `quantity`,
/// neither of which is required.
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "message": "Donation added" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not a JSON object
/// - 413 Payload Too Large if the body exceeds the size limit
/// - 415 Unsupported Media Type without a JSON content type
/// - 500 Internal Server Error if the store fails
pub async fn create_donation_handler(
    State(state): State<AppState>,
    payload: Result<Json<Document>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let response = add_donation(&state, payload).await?;
    Ok((StatusCode::CREATED, response))
}

/// Records a donation via the donations group mount.
///
/// # Endpoint
///
/// `POST /api/donations`
///
/// Identical to [`create_donation_handler`] but answers **200 OK**.
pub async fn create_donation_alt_handler(
    State(state): State<AppState>,
    payload: Result<Json<Document>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    add_donation(&state, payload).await
}

async fn add_donation(
    state: &AppState,
    payload: Result<Json<Document>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(donation) = payload?;

    state.donation_service.create_donation(donation).await?;

    Ok(Json(MessageResponse::new(DONATION_ADDED)))
}

/// Lists donations.
///
/// # Endpoints
///
/// `GET /donations`, `GET /api/donations`
///
/// # Query Parameters
///
/// - `provider` (optional): keep only donations whose `providerName` equals
///   this value (case-sensitive). An empty value disables the filter.
/// - `providerId` (optional): same, matched against `providerId`.
///
/// A repeated parameter uses its first value.
///
/// # Response
///
/// JSON array of donation objects, each with its identifier under `id`:
///
/// ```json
/// [ { "providerName": "Cafe", "quantity": 4, "id": "Xk3v9QmZp2LrT8aBcD1e" } ]
/// ```
pub async fn list_donations_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let Query(pairs) = query?;
    let params = DonationsQuery::from_pairs(pairs);

    let donations = state
        .donation_service
        .list_donations(params.filter())
        .await?;

    Ok(Json(donations))
}

/// Predicts how long a donation stays edible.
///
/// # Endpoints
///
/// `GET /donations/{id}/expiry`, `GET /api/donations/{id}/expiry`
///
/// # Response
///
/// ```json
/// {
///   "id": "Xk3v9QmZp2LrT8aBcD1e",
///   "remainingHours": 3.5,
///   "urgency": "High",
///   "explanations": [
///     { "factor": "Food Type Sensitivity", "impact": "Base shelf life for Cooked Meal is 6 hours.", "score": 6.0 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 404 Not Found for an unknown id
/// - 500 Internal Server Error if the store fails
pub async fn donation_expiry_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpiryResponse>, AppError> {
    let prediction = state
        .donation_service
        .predict_expiry(&id, Utc::now())
        .await?;

    Ok(Json(ExpiryResponse::new(id, prediction)))
}
