//! User repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{RegisterProfile, UpdateProfile, User, UserRole};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the profile row for a token subject
    ///
    /// Returns `None` when the subject is already registered.
    pub async fn create(
        &self,
        id: Uuid,
        email: &str,
        role: UserRole,
        profile: &RegisterProfile,
    ) -> Result<Option<User>> {
        info!("Registering profile for user {}", id);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, phone_number, email, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            RETURNING id, name, phone_number, email, role, avatar_url, created_at
            "#,
        )
        .bind(id)
        .bind(&profile.name)
        .bind(&profile.phone_number)
        .bind(email)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, phone_number, email, role, avatar_url, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update the mutable profile fields, leaving omitted ones untouched
    pub async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                phone_number = COALESCE($3, phone_number),
                avatar_url = COALESCE($4, avatar_url)
            WHERE id = $1
            RETURNING id, name, phone_number, email, role, avatar_url, created_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.phone_number)
        .bind(&update.avatar_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Total number of registered users
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
