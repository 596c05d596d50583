use crate::dtos::{booking_to_json, CreateBookingResponse};
use crate::models::{Booking, BOOKING_COLLECTION};
use crate::services::record_booking_created;
use crate::utils::ValidatedJson;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use service_core::error::AppError;

/// Upper bound on bookings returned by a single listing.
pub const BOOKING_LIST_LIMIT: i64 = 50;

pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(booking): ValidatedJson<Booking>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let document = booking.to_document()?;
    let id = state
        .store
        .create_document(BOOKING_COLLECTION, document)
        .await?;

    record_booking_created();
    tracing::info!(booking_id = %id, service = %booking.service, "Booking created");

    Ok((StatusCode::CREATED, Json(CreateBookingResponse::new(id))))
}

pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let documents = state
        .store
        .get_documents(BOOKING_COLLECTION, Some(BOOKING_LIST_LIMIT))
        .await?;

    Ok(Json(
        documents
            .into_iter()
            .take(BOOKING_LIST_LIMIT as usize)
            .map(booking_to_json)
            .collect(),
    ))
}
