//! User profile model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account role, issued by the identity provider and mirrored locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Photographer,
    StudioOwner,
    Admin,
}

/// User profile entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering the local profile of a token subject
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterProfile {
    pub name: String,
    pub phone_number: Option<String>,
}

/// Profile update payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_on_the_wire() {
        let role: UserRole = serde_json::from_str("\"studio_owner\"").unwrap();
        assert_eq!(role, UserRole::StudioOwner);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"studio_owner\"");
    }
}
