//! API service routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{auth::auth_middleware, state::AppState};

pub mod admin;
pub mod bookings;
pub mod notifications;
pub mod owner;
pub mod profile;
pub mod studios;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/me",
            post(profile::register).get(profile::me).put(profile::update),
        )
        .route("/studios", get(studios::list))
        .route("/studios/:id", get(studios::detail))
        .route("/bookings", post(bookings::create).get(bookings::mine))
        .route("/bookings/:id/cancel", post(bookings::cancel))
        .route("/notifications", get(notifications::list))
        .route("/notifications/:id/read", post(notifications::mark_read))
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route(
            "/owner/studios",
            get(owner::studios).post(owner::create_studio),
        )
        .route("/owner/rooms", get(owner::rooms).post(owner::create_room))
        .route(
            "/owner/equipment",
            get(owner::equipment).post(owner::create_equipment),
        )
        .route("/owner/scan", post(owner::scan))
        .route("/owner/scans", get(owner::recent_scans))
        .route("/owner/bookings", get(owner::bookings))
        .route("/owner/bookings/:id/decision", post(owner::decide_booking))
        .route("/owner/dashboard", get(owner::dashboard))
        .route("/admin/stats", get(admin::stats))
        .route("/admin/studios/pending", get(admin::pending_studios))
        .route("/admin/studios/:id/verdict", post(admin::studio_verdict))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-service"
    }))
}
