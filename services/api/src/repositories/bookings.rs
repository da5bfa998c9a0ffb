//! Booking repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, BookingSummary, NewBooking};

/// Booking repository
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a booking with a server-computed total
    ///
    /// Payment and booking status both start as pending.
    pub async fn create(
        &self,
        photographer_id: Uuid,
        new_booking: &NewBooking,
        equipment_ids: &[Uuid],
        total_price: i64,
    ) -> Result<Booking> {
        info!(
            "Creating booking for room {} by photographer {}",
            new_booking.room_id, photographer_id
        );

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (room_id, photographer_id, start_time, end_time, equipment_ids, total_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new_booking.room_id)
        .bind(photographer_id)
        .bind(new_booking.start_time)
        .bind(new_booking.end_time)
        .bind(equipment_ids)
        .bind(total_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Whether the room already has a pending or accepted booking
    /// intersecting the given range
    pub async fn has_overlap(
        &self,
        room_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM bookings
                WHERE room_id = $1
                  AND booking_status IN ('pending', 'accepted')
                  AND start_time < $3
                  AND end_time > $2
            )
            "#,
        )
        .bind(room_id)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Bookings made by a photographer, newest first
    pub async fn list_for_photographer(&self, photographer_id: Uuid) -> Result<Vec<BookingSummary>> {
        let bookings = sqlx::query_as::<_, BookingSummary>(
            r#"
            SELECT b.*, r.name AS room_name, s.name AS studio_name
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            JOIN studios s ON s.id = r.studio_id
            WHERE b.photographer_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(photographer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Bookings for rooms in an owner's studios, newest first
    ///
    /// A `None` limit returns them all.
    pub async fn list_for_owner(
        &self,
        owner_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<BookingSummary>> {
        let bookings = sqlx::query_as::<_, BookingSummary>(
            r#"
            SELECT b.*, r.name AS room_name, s.name AS studio_name
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            JOIN studios s ON s.id = r.studio_id
            WHERE s.owner_id = $1
            ORDER BY b.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Cancel a photographer's own still-pending booking
    ///
    /// Returns `None` when no matching pending booking exists.
    pub async fn cancel(&self, id: Uuid, photographer_id: Uuid) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET booking_status = 'cancelled'
            WHERE id = $1 AND photographer_id = $2 AND booking_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(photographer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Apply an owner's verdict to a pending booking on one of their rooms
    ///
    /// Returns `None` when the booking does not exist, is not pending, or
    /// does not belong to the owner's studios.
    pub async fn decide(
        &self,
        id: Uuid,
        owner_id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>> {
        info!("Setting booking {} status to {:?}", id, status);

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET booking_status = $3
            FROM rooms, studios
            WHERE bookings.id = $1
              AND rooms.id = bookings.room_id
              AND studios.id = rooms.studio_id
              AND studios.owner_id = $2
              AND bookings.booking_status = 'pending'
            RETURNING bookings.*
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Total number of bookings
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Number of bookings for rooms in an owner's studios
    pub async fn count_for_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            JOIN studios s ON s.id = r.studio_id
            WHERE s.owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Revenue over paid bookings across the whole marketplace
    pub async fn total_revenue(&self) -> Result<i64> {
        let revenue: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_price), 0)::bigint FROM bookings WHERE payment_status = 'paid'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }

    /// Revenue over paid bookings for rooms in an owner's studios
    pub async fn revenue_for_owner(&self, owner_id: Uuid) -> Result<i64> {
        let revenue: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(b.total_price), 0)::bigint
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            JOIN studios s ON s.id = r.studio_id
            WHERE s.owner_id = $1 AND b.payment_status = 'paid'
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }
}
