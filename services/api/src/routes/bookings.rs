//! Booking endpoints for photographers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    models::{EquipmentStatus, NewBooking, UserRole, VerificationStatus},
    pricing, state::AppState, validation,
};

/// Create a booking for a room, with optional equipment add-ons
///
/// The total price is always computed server-side from the stored room and
/// equipment prices.
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewBooking>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Photographer)?;

    validation::validate_time_range(payload.start_time, payload.end_time)
        .map_err(ApiError::BadRequest)?;

    let context = state
        .rooms
        .find_context(payload.room_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load room: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    if context.studio_status != VerificationStatus::Approved {
        return Err(ApiError::BadRequest(
            "Studio is not open for booking".to_string(),
        ));
    }

    // Deduplicate so one item cannot be charged twice
    let mut equipment_ids: Vec<Uuid> = payload.equipment_ids.clone();
    equipment_ids.sort();
    equipment_ids.dedup();

    let selected = if equipment_ids.is_empty() {
        vec![]
    } else {
        let items = state
            .equipment
            .find_for_studio(&equipment_ids, context.room.studio_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load selected equipment: {}", e);
                ApiError::InternalServerError
            })?;

        if items.len() != equipment_ids.len() {
            return Err(ApiError::BadRequest(
                "Selected equipment must belong to the booked studio".to_string(),
            ));
        }

        if let Some(item) = items.iter().find(|i| i.status != EquipmentStatus::Available) {
            return Err(ApiError::Conflict(format!(
                "Equipment '{}' is not available",
                item.name
            )));
        }

        items
    };

    let overlap = state
        .bookings
        .has_overlap(payload.room_id, payload.start_time, payload.end_time)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check room availability: {}", e);
            ApiError::InternalServerError
        })?;

    if overlap {
        return Err(ApiError::Conflict(
            "Room is already booked for this time range".to_string(),
        ));
    }

    let minutes = (payload.end_time - payload.start_time).num_minutes();
    let total_price = pricing::booking_total(&context.room, minutes, &selected);

    let booking = state
        .bookings
        .create(auth.id, &payload, &equipment_ids, total_price)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create booking: {}", e);
            ApiError::InternalServerError
        })?;

    // The booking is stored at this point; a failed notification only logs
    if let Err(e) = state
        .notifications
        .create(
            auth.id,
            "Booking received",
            "Your booking was submitted and is awaiting approval",
            "booking",
        )
        .await
    {
        tracing::error!("Failed to record booking notification: {}", e);
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

/// The caller's bookings, newest first
pub async fn mine(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Photographer)?;

    let bookings = state
        .bookings
        .list_for_photographer(auth.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(bookings))
}

/// Cancel one of the caller's still-pending bookings
pub async fn cancel(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Photographer)?;

    let booking = state
        .bookings
        .cancel(id, auth.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to cancel booking: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Booking not found or not pending".to_string()))?;

    Ok(Json(booking))
}
