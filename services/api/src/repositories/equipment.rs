//! Equipment repository for database operations, including the barcode
//! check-out/check-in flow and its audit trail

use anyhow::Result;
use sqlx::{FromRow, PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{Equipment, EquipmentStatus, NewEquipment, ScanAction, ScanRecord};

/// Equipment repository
#[derive(Clone)]
pub struct EquipmentRepository {
    pool: PgPool,
}

impl EquipmentRepository {
    /// Create a new equipment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an equipment item with a server-generated barcode code
    pub async fn create(&self, new_equipment: &NewEquipment, barcode_code: &str) -> Result<Equipment> {
        info!(
            "Creating equipment '{}' in studio {}",
            new_equipment.name, new_equipment.studio_id
        );

        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (studio_id, name, brand, kind, rental_price, condition, serial_number, barcode_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new_equipment.studio_id)
        .bind(&new_equipment.name)
        .bind(&new_equipment.brand)
        .bind(&new_equipment.kind)
        .bind(new_equipment.rental_price)
        .bind(&new_equipment.condition)
        .bind(&new_equipment.serial_number)
        .bind(barcode_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(equipment)
    }

    /// All equipment of a studio, by name
    pub async fn list_for_studio(&self, studio_id: Uuid) -> Result<Vec<Equipment>> {
        let items =
            sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE studio_id = $1 ORDER BY name")
                .bind(studio_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(items)
    }

    /// Currently available equipment of a studio, by name
    pub async fn list_available_for_studio(&self, studio_id: Uuid) -> Result<Vec<Equipment>> {
        let items = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment WHERE studio_id = $1 AND status = 'available' ORDER BY name",
        )
        .bind(studio_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// The subset of the given ids that belongs to the studio
    pub async fn find_for_studio(&self, ids: &[Uuid], studio_id: Uuid) -> Result<Vec<Equipment>> {
        let items = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment WHERE id = ANY($1) AND studio_id = $2",
        )
        .bind(ids)
        .bind(studio_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Look up equipment by barcode code, along with the owning studio's owner
    pub async fn find_by_barcode(&self, barcode_code: &str) -> Result<Option<(Equipment, Uuid)>> {
        let row = sqlx::query(
            r#"
            SELECT e.*, s.owner_id AS studio_owner_id
            FROM equipment e
            JOIN studios s ON s.id = e.studio_id
            WHERE e.barcode_code = $1
            "#,
        )
        .bind(barcode_code)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let equipment = Equipment::from_row(&row)?;
                let owner_id: Uuid = row.get("studio_owner_id");
                Ok(Some((equipment, owner_id)))
            }
            None => Ok(None),
        }
    }

    /// Record a scan and flip the equipment status in one transaction
    pub async fn scan(
        &self,
        equipment_id: Uuid,
        user_id: Uuid,
        action: ScanAction,
        new_status: EquipmentStatus,
    ) -> Result<Equipment> {
        info!("Recording {:?} for equipment {}", action, equipment_id);

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO equipment_logs (equipment_id, user_id, action) VALUES ($1, $2, $3)")
            .bind(equipment_id)
            .bind(user_id)
            .bind(action)
            .execute(&mut *tx)
            .await?;

        let equipment = sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(equipment_id)
        .bind(new_status)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(equipment)
    }

    /// Most recent scans across all studios of an owner, newest first
    pub async fn recent_scans(&self, owner_id: Uuid, limit: i64) -> Result<Vec<ScanRecord>> {
        let scans = sqlx::query_as::<_, ScanRecord>(
            r#"
            SELECT l.id,
                   l.equipment_id,
                   e.name AS equipment_name,
                   u.name AS user_name,
                   l.action,
                   l.scanned_at
            FROM equipment_logs l
            JOIN equipment e ON e.id = l.equipment_id
            JOIN studios s ON s.id = e.studio_id
            JOIN users u ON u.id = l.user_id
            WHERE s.owner_id = $1
            ORDER BY l.scanned_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(scans)
    }

    /// Number of equipment items across all studios of an owner
    pub async fn count_for_owner(&self, owner_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM equipment e
            JOIN studios s ON s.id = e.studio_id
            WHERE s.owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Total number of equipment items
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
