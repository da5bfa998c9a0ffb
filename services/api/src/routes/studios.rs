//! Studio directory endpoints for photographers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    models::{Studio, StudioDetail, UserRole},
    state::AppState,
};

/// Cache key for the unfiltered approved-studio directory
pub(crate) const STUDIO_DIRECTORY_CACHE_KEY: &str = "studios:directory";
const STUDIO_DIRECTORY_TTL_SECONDS: u64 = 60;

/// Directory filters
#[derive(Debug, Deserialize)]
pub struct StudioListQuery {
    /// Exact city name
    pub city: Option<String>,
    /// Case-insensitive name/description search
    pub q: Option<String>,
}

/// List approved studios, optionally filtered by city or search term
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<StudioListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Photographer)?;

    let unfiltered = query.city.is_none() && query.q.is_none();

    // Cache reads are best-effort; a cold or unreachable cache falls
    // through to the database.
    if unfiltered {
        match state
            .cache
            .get_json::<Vec<Studio>>(STUDIO_DIRECTORY_CACHE_KEY)
            .await
        {
            Ok(Some(studios)) => return Ok(Json(studios)),
            Ok(None) => {}
            Err(e) => tracing::warn!("Studio directory cache read failed: {}", e),
        }
    }

    let studios = state
        .studios
        .list_approved(query.city.as_deref(), query.q.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list studios: {}", e);
            ApiError::InternalServerError
        })?;

    if unfiltered {
        if let Err(e) = state
            .cache
            .set_json(
                STUDIO_DIRECTORY_CACHE_KEY,
                &studios,
                Some(STUDIO_DIRECTORY_TTL_SECONDS),
            )
            .await
        {
            tracing::warn!("Studio directory cache write failed: {}", e);
        }
    }

    Ok(Json(studios))
}

/// One approved studio with its rooms and available equipment
pub async fn detail(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require(UserRole::Photographer)?;

    let studio = state
        .studios
        .find_approved(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch studio: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Studio not found".to_string()))?;

    let (rooms, equipment) = tokio::try_join!(
        state.rooms.list_for_studio(studio.id),
        state.equipment.list_available_for_studio(studio.id),
    )
    .map_err(|e| {
        tracing::error!("Failed to fetch studio inventory: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(StudioDetail {
        studio,
        rooms,
        equipment,
    }))
}
