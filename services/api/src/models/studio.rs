//! Studio model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{Equipment, Room};

/// Admin verification state of a studio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Studio entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Studio {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub province: String,
    pub city: String,
    pub address: String,
    pub map_coordinates: Option<serde_json::Value>,
    pub photos: Vec<String>,
    pub verification_status: VerificationStatus,
    pub created_at: DateTime<Utc>,
}

/// Studio creation payload, always enters verification as pending
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudio {
    pub name: String,
    pub description: Option<String>,
    pub province: String,
    pub city: String,
    pub address: String,
    pub map_coordinates: Option<serde_json::Value>,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Studio joined with its owner's contact details, for the approvals queue
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudioWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub studio: Studio,
    pub owner_name: String,
    pub owner_email: String,
}

/// One studio together with its bookable inventory
#[derive(Debug, Clone, Serialize)]
pub struct StudioDetail {
    #[serde(flatten)]
    pub studio: Studio,
    pub rooms: Vec<Room>,
    pub equipment: Vec<Equipment>,
}

/// Admin verdict on a pending studio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudioVerdict {
    Approved,
    Rejected,
}

impl From<StudioVerdict> for VerificationStatus {
    fn from(verdict: StudioVerdict) -> Self {
        match verdict {
            StudioVerdict::Approved => VerificationStatus::Approved,
            StudioVerdict::Rejected => VerificationStatus::Rejected,
        }
    }
}

/// Body of `POST /admin/studios/:id/verdict`
#[derive(Debug, Clone, Deserialize)]
pub struct VerdictRequest {
    pub verdict: StudioVerdict,
}
