//! Studio-owner endpoints: inventory management, the barcode scan flow,
//! booking decisions, and the dashboard

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    barcode,
    error::ApiError,
    models::{
        BookingDecision, BookingSummary, DecisionRequest, EquipmentStatus, NewEquipment, NewRoom,
        NewStudio, ScanAction, ScanRequest, Studio, UserRole, VerificationStatus,
    },
    state::AppState,
    validation,
};

const RECENT_SCANS_LIMIT: i64 = 10;
const DASHBOARD_RECENT_BOOKINGS: i64 = 5;

/// Scope query for inventory listings
#[derive(Debug, Deserialize)]
pub struct StudioScope {
    pub studio_id: Uuid,
}

/// Dashboard figures for a studio owner
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub studios: i64,
    pub rooms: i64,
    pub equipment: i64,
    pub bookings: i64,
    pub revenue: i64,
    pub recent_bookings: Vec<BookingSummary>,
}

/// Resolve a studio the caller owns, or fail the request
async fn owned_studio(state: &AppState, studio_id: Uuid, owner_id: Uuid) -> Result<Studio, ApiError> {
    state
        .studios
        .find_owned(studio_id, owner_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load studio: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Studio not found".to_string()))
}

/// The caller's studios, newest first
pub async fn studios(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let studios = state.studios.list_for_owner(auth.id).await.map_err(|e| {
        tracing::error!("Failed to list studios: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(studios))
}

/// Register a studio; it enters the admin approval queue as pending
pub async fn create_studio(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewStudio>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    validation::validate_required("name", &payload.name).map_err(ApiError::BadRequest)?;
    validation::validate_required("province", &payload.province).map_err(ApiError::BadRequest)?;
    validation::validate_required("city", &payload.city).map_err(ApiError::BadRequest)?;
    validation::validate_required("address", &payload.address).map_err(ApiError::BadRequest)?;

    let studio = state.studios.create(auth.id, &payload).await.map_err(|e| {
        tracing::error!("Failed to create studio: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(studio)))
}

/// Rooms of one of the caller's studios
pub async fn rooms(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(scope): Query<StudioScope>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let studio = owned_studio(&state, scope.studio_id, auth.id).await?;

    let rooms = state.rooms.list_for_studio(studio.id).await.map_err(|e| {
        tracing::error!("Failed to list rooms: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(rooms))
}

/// Add a room to an approved studio
pub async fn create_room(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewRoom>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let studio = owned_studio(&state, payload.studio_id, auth.id).await?;
    if studio.verification_status != VerificationStatus::Approved {
        return Err(ApiError::BadRequest(
            "Studio is not approved yet".to_string(),
        ));
    }

    validation::validate_required("name", &payload.name).map_err(ApiError::BadRequest)?;
    validation::validate_price("hourly_price", payload.hourly_price)
        .map_err(ApiError::BadRequest)?;
    validation::validate_price("daily_price", payload.daily_price).map_err(ApiError::BadRequest)?;

    let room = state.rooms.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create room: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Equipment of one of the caller's studios
pub async fn equipment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(scope): Query<StudioScope>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let studio = owned_studio(&state, scope.studio_id, auth.id).await?;

    let items = state
        .equipment
        .list_for_studio(studio.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list equipment: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(items))
}

/// Register equipment under an approved studio with a generated barcode
pub async fn create_equipment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewEquipment>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let studio = owned_studio(&state, payload.studio_id, auth.id).await?;
    if studio.verification_status != VerificationStatus::Approved {
        return Err(ApiError::BadRequest(
            "Studio is not approved yet".to_string(),
        ));
    }

    validation::validate_required("name", &payload.name).map_err(ApiError::BadRequest)?;
    validation::validate_required("kind", &payload.kind).map_err(ApiError::BadRequest)?;
    validation::validate_price("rental_price", payload.rental_price)
        .map_err(ApiError::BadRequest)?;

    let barcode_code = barcode::generate_code();
    let item = state
        .equipment
        .create(&payload, &barcode_code)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create equipment: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Check equipment out or back in by barcode
pub async fn scan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<ScanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let barcode_code = payload.barcode_code.trim();
    if barcode_code.is_empty() {
        return Err(ApiError::BadRequest("Barcode code is required".to_string()));
    }

    let (item, studio_owner_id) = state
        .equipment
        .find_by_barcode(barcode_code)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up barcode: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("No equipment matches this barcode".to_string()))?;

    if studio_owner_id != auth.id {
        return Err(ApiError::Forbidden);
    }

    let new_status = match payload.action {
        ScanAction::ScanOut => {
            if item.status != EquipmentStatus::Available {
                return Err(ApiError::Conflict(
                    "Equipment is not available right now".to_string(),
                ));
            }
            EquipmentStatus::Rented
        }
        ScanAction::ScanIn => {
            if item.status != EquipmentStatus::Rented {
                return Err(ApiError::Conflict(
                    "Equipment is not checked out".to_string(),
                ));
            }
            EquipmentStatus::Available
        }
    };

    let updated = state
        .equipment
        .scan(item.id, auth.id, payload.action, new_status)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record scan: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(updated))
}

/// The most recent scans across the caller's studios
pub async fn recent_scans(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let scans = state
        .equipment
        .recent_scans(auth.id, RECENT_SCANS_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list scans: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(scans))
}

/// Bookings for rooms in the caller's studios, newest first
pub async fn bookings(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let bookings = state
        .bookings
        .list_for_owner(auth.id, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(bookings))
}

/// Accept or reject a pending booking on one of the caller's rooms
pub async fn decide_booking(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let booking = state
        .bookings
        .decide(id, auth.id, payload.decision.into())
        .await
        .map_err(|e| {
            tracing::error!("Failed to decide booking: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Booking not found or already resolved".to_string()))?;

    let (title, message) = match payload.decision {
        BookingDecision::Accepted => (
            "Booking accepted",
            "Your booking has been accepted by the studio",
        ),
        BookingDecision::Rejected => (
            "Booking rejected",
            "Unfortunately your booking was rejected by the studio",
        ),
    };

    if let Err(e) = state
        .notifications
        .create(booking.photographer_id, title, message, "booking")
        .await
    {
        tracing::error!("Failed to record decision notification: {}", e);
    }

    Ok(Json(booking))
}

/// Aggregate figures for the owner dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::StudioOwner)?;

    let (studios, rooms, equipment, bookings, revenue, recent_bookings) = tokio::try_join!(
        state.studios.count_for_owner(auth.id),
        state.rooms.count_for_owner(auth.id),
        state.equipment.count_for_owner(auth.id),
        state.bookings.count_for_owner(auth.id),
        state.bookings.revenue_for_owner(auth.id),
        state
            .bookings
            .list_for_owner(auth.id, Some(DASHBOARD_RECENT_BOOKINGS)),
    )
    .map_err(|e| {
        tracing::error!("Failed to load dashboard: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(DashboardStats {
        studios,
        rooms,
        equipment,
        bookings,
        revenue,
        recent_bookings,
    }))
}
