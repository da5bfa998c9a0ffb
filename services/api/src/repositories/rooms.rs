//! Room repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewRoom, Room, RoomContext};

/// Room repository
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a room under a studio
    pub async fn create(&self, new_room: &NewRoom) -> Result<Room> {
        info!(
            "Creating room '{}' in studio {}",
            new_room.name, new_room.studio_id
        );

        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (studio_id, name, description, hourly_price, daily_price, features, images)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new_room.studio_id)
        .bind(&new_room.name)
        .bind(&new_room.description)
        .bind(new_room.hourly_price)
        .bind(new_room.daily_price)
        .bind(&new_room.features)
        .bind(&new_room.images)
        .fetch_one(&self.pool)
        .await?;

        Ok(room)
    }

    /// Rooms of a studio, by name
    pub async fn list_for_studio(&self, studio_id: Uuid) -> Result<Vec<Room>> {
        let rooms =
            sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE studio_id = $1 ORDER BY name")
                .bind(studio_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rooms)
    }

    /// A room together with the owning studio's verification state
    pub async fn find_context(&self, id: Uuid) -> Result<Option<RoomContext>> {
        let context = sqlx::query_as::<_, RoomContext>(
            r#"
            SELECT r.*,
                   s.verification_status AS studio_status
            FROM rooms r
            JOIN studios s ON s.id = r.studio_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(context)
    }

    /// Number of rooms across all studios of an owner
    pub async fn count_for_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM rooms r
            JOIN studios s ON s.id = r.studio_id
            WHERE s.owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
