//! Equipment model, scan payloads, and the check-out/check-in audit trail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Availability state of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    Rented,
    Damaged,
}

/// Direction of a barcode scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "scan_action", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScanAction {
    ScanOut,
    ScanIn,
}

/// Equipment entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipment {
    pub id: Uuid,
    pub studio_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub kind: String,
    pub rental_price: i64,
    pub condition: Option<String>,
    pub serial_number: Option<String>,
    pub barcode_code: String,
    pub barcode_image_url: Option<String>,
    pub status: EquipmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Equipment creation payload; the barcode code is generated server-side
#[derive(Debug, Clone, Deserialize)]
pub struct NewEquipment {
    pub studio_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub kind: String,
    pub rental_price: i64,
    pub condition: Option<String>,
    pub serial_number: Option<String>,
}

/// Body of `POST /owner/scan`
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub barcode_code: String,
    pub action: ScanAction,
}

/// One row of the recent-scans feed
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScanRecord {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub equipment_name: String,
    pub user_name: String,
    pub action: ScanAction,
    pub scanned_at: DateTime<Utc>,
}
