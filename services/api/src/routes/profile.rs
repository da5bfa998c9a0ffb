//! Profile endpoints for the authenticated caller
//!
//! The identity provider owns credentials; this service only keeps the
//! profile row the marketplace joins against (names on approvals, scan
//! logs, and so on).

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    auth::AuthUser,
    error::ApiError,
    models::{RegisterProfile, UpdateProfile},
    state::AppState,
    validation,
};

/// Create the profile row for the token subject
pub async fn register(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<RegisterProfile>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_required("name", &payload.name).map_err(ApiError::BadRequest)?;
    if let Some(phone_number) = &payload.phone_number {
        validation::validate_phone_number(phone_number).map_err(ApiError::BadRequest)?;
    }

    let user = state
        .users
        .create(auth.id, &auth.email, auth.role, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to register profile: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Conflict("Profile already exists".to_string()))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch the caller's profile
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .find_by_id(auth.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profile: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(user))
}

/// Update the caller's profile
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateProfile>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(name) = &payload.name {
        validation::validate_required("name", name).map_err(ApiError::BadRequest)?;
    }
    if let Some(phone_number) = &payload.phone_number {
        validation::validate_phone_number(phone_number).map_err(ApiError::BadRequest)?;
    }

    let user = state
        .users
        .update_profile(auth.id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(user))
}
