//! Admin endpoints: marketplace stats and the studio approval queue

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    models::{StudioVerdict, UserRole, VerdictRequest, VerificationStatus},
    routes::studios::STUDIO_DIRECTORY_CACHE_KEY,
    state::AppState,
};

/// Marketplace-wide figures for the admin dashboard
#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub total_studios: i64,
    pub pending_studios: i64,
    pub approved_studios: i64,
    pub total_users: i64,
    pub total_bookings: i64,
    pub total_equipment: i64,
    pub total_revenue: i64,
}

/// Aggregate figures across the whole marketplace
pub async fn stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Admin)?;

    let (
        total_studios,
        pending_studios,
        approved_studios,
        total_users,
        total_bookings,
        total_equipment,
        total_revenue,
    ) = tokio::try_join!(
        state.studios.count(),
        state.studios.count_by_status(VerificationStatus::Pending),
        state.studios.count_by_status(VerificationStatus::Approved),
        state.users.count(),
        state.bookings.count(),
        state.equipment.count(),
        state.bookings.total_revenue(),
    )
    .map_err(|e| {
        tracing::error!("Failed to load admin stats: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(AdminStats {
        total_studios,
        pending_studios,
        approved_studios,
        total_users,
        total_bookings,
        total_equipment,
        total_revenue,
    }))
}

/// Studios waiting for a verdict, with owner contact details
pub async fn pending_studios(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Admin)?;

    let studios = state
        .studios
        .list_pending_with_owner()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pending studios: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(studios))
}

/// Approve or reject a pending studio
pub async fn studio_verdict(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerdictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Admin)?;

    let studio = state
        .studios
        .set_verification(id, payload.verdict.into())
        .await
        .map_err(|e| {
            tracing::error!("Failed to set studio verdict: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Studio not found or already decided".to_string()))?;

    let (title, message) = match payload.verdict {
        StudioVerdict::Approved => (
            "Studio approved",
            format!("Your studio {} has been approved", studio.name),
        ),
        StudioVerdict::Rejected => (
            "Studio rejected",
            format!("Unfortunately your studio {} was not approved", studio.name),
        ),
    };

    if let Err(e) = state
        .notifications
        .create(studio.owner_id, title, &message, "approval")
        .await
    {
        tracing::error!("Failed to record approval notification: {}", e);
    }

    // The verdict changes the public directory
    if let Err(e) = state.cache.delete(STUDIO_DIRECTORY_CACHE_KEY).await {
        tracing::warn!("Failed to invalidate studio directory cache: {}", e);
    }

    Ok(Json(studio))
}
