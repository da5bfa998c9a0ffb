//! Booking model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub photographer_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub equipment_ids: Vec<Uuid>,
    pub total_price: i64,
    pub payment_status: PaymentStatus,
    pub booking_status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking creation payload; the total price is computed server-side
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub room_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub equipment_ids: Vec<Uuid>,
}

/// A booking joined with the room and studio it reserves
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookingSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub room_name: String,
    pub studio_name: String,
}

/// Owner verdict on a pending booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingDecision {
    Accepted,
    Rejected,
}

impl From<BookingDecision> for BookingStatus {
    fn from(decision: BookingDecision) -> Self {
        match decision {
            BookingDecision::Accepted => BookingStatus::Accepted,
            BookingDecision::Rejected => BookingStatus::Rejected,
        }
    }
}

/// Body of `POST /owner/bookings/:id/decision`
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    pub decision: BookingDecision,
}
