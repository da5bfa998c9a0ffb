//! Room model and related payloads
//!
//! Prices are whole currency units. A room charges `hourly_price` per hour
//! up to the daily-rate threshold, after which `daily_price` applies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::VerificationStatus;

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: Uuid,
    pub studio_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub hourly_price: i64,
    pub daily_price: i64,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Room creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoom {
    pub studio_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub hourly_price: i64,
    pub daily_price: i64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A room together with the studio facts booking validation needs
#[derive(Debug, Clone, FromRow)]
pub struct RoomContext {
    #[sqlx(flatten)]
    pub room: Room,
    pub studio_status: VerificationStatus,
}
