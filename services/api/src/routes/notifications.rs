//! Notification endpoints, shared by every role

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, models::NotificationList, state::AppState};

/// The caller's notifications, newest first, with the unread count
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let (notifications, unread) = tokio::try_join!(
        state.notifications.list_for_user(auth.id),
        state.notifications.unread_count(auth.id),
    )
    .map_err(|e| {
        tracing::error!("Failed to list notifications: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(NotificationList {
        notifications,
        unread,
    }))
}

/// Mark one of the caller's notifications as read
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state
        .notifications
        .mark_read(id, auth.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark notification as read: {}", e);
            ApiError::InternalServerError
        })?;

    if !updated {
        return Err(ApiError::NotFound("Notification not found".to_string()));
    }

    Ok(Json(json!({"message": "Notification marked as read"})))
}

/// Mark all of the caller's unread notifications as read
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state
        .notifications
        .mark_all_read(auth.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark notifications as read: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"updated": updated})))
}
