//! Handler for user registration.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::message::MessageResponse;
use crate::domain::entities::Document;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// Any JSON object; every field is stored as submitted.
///
/// # Response
///
/// ```json
/// { "message": "User registered" }
/// ```
///
/// The assigned identifier is not returned.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<Document>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(user) = payload?;

    state.user_service.register(user).await?;

    Ok(Json(MessageResponse::new("User registered")))
}
