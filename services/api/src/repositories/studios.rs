//! Studio repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewStudio, Studio, StudioWithOwner, VerificationStatus};

/// Studio repository
#[derive(Clone)]
pub struct StudioRepository {
    pool: PgPool,
}

impl StudioRepository {
    /// Create a new studio repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a studio for an owner; verification starts as pending
    pub async fn create(&self, owner_id: Uuid, new_studio: &NewStudio) -> Result<Studio> {
        info!("Creating studio '{}' for owner {}", new_studio.name, owner_id);

        let studio = sqlx::query_as::<_, Studio>(
            r#"
            INSERT INTO studios (owner_id, name, description, province, city, address, map_coordinates, photos)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&new_studio.name)
        .bind(&new_studio.description)
        .bind(&new_studio.province)
        .bind(&new_studio.city)
        .bind(&new_studio.address)
        .bind(&new_studio.map_coordinates)
        .bind(&new_studio.photos)
        .fetch_one(&self.pool)
        .await?;

        Ok(studio)
    }

    /// Approved studios for the public directory, newest first
    ///
    /// `city` filters on the exact city name; `search` matches name or
    /// description case-insensitively.
    pub async fn list_approved(
        &self,
        city: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Studio>> {
        let studios = sqlx::query_as::<_, Studio>(
            r#"
            SELECT *
            FROM studios
            WHERE verification_status = 'approved'
              AND ($1::text IS NULL OR city = $1)
              AND ($2::text IS NULL
                   OR name ILIKE '%' || $2 || '%'
                   OR COALESCE(description, '') ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(city)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;

        Ok(studios)
    }

    /// Find an approved studio by ID
    pub async fn find_approved(&self, id: Uuid) -> Result<Option<Studio>> {
        let studio = sqlx::query_as::<_, Studio>(
            "SELECT * FROM studios WHERE id = $1 AND verification_status = 'approved'",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(studio)
    }

    /// All studios belonging to an owner, newest first
    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Studio>> {
        let studios = sqlx::query_as::<_, Studio>(
            "SELECT * FROM studios WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(studios)
    }

    /// Find a studio only if it belongs to the given owner
    pub async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Studio>> {
        let studio =
            sqlx::query_as::<_, Studio>("SELECT * FROM studios WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(studio)
    }

    /// Pending studios with owner contact details, newest first
    pub async fn list_pending_with_owner(&self) -> Result<Vec<StudioWithOwner>> {
        let studios = sqlx::query_as::<_, StudioWithOwner>(
            r#"
            SELECT s.*, u.name AS owner_name, u.email AS owner_email
            FROM studios s
            JOIN users u ON u.id = s.owner_id
            WHERE s.verification_status = 'pending'
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(studios)
    }

    /// Apply an admin verdict to a still-pending studio
    ///
    /// Returns `None` when the studio does not exist or was already decided.
    pub async fn set_verification(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<Option<Studio>> {
        info!("Setting studio {} verification to {:?}", id, status);

        let studio = sqlx::query_as::<_, Studio>(
            r#"
            UPDATE studios
            SET verification_status = $2
            WHERE id = $1 AND verification_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(studio)
    }

    /// Total number of studios
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM studios")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Number of studios in one verification state
    pub async fn count_by_status(&self, status: VerificationStatus) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM studios WHERE verification_status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Number of studios belonging to an owner
    pub async fn count_for_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM studios WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
