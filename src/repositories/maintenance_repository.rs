use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::vehicle_repository::VehicleRepository;
use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::models::{MaintenanceRecord, Vehicle};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registra el mantenimiento y actualiza el vehículo en la misma transacción:
    /// lecturas por defecto, fecha del último mantenimiento y próximos umbrales.
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<Option<(MaintenanceRecord, Vehicle)>, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(vehicle) = VehicleRepository::find_for_update(&mut tx, vehicle_id).await? else {
            return Ok(None);
        };

        let effects = request.effects_on(&vehicle);

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (
                id, vehicle_id, performed_by_user_id, maintenance_date, description,
                maintenance_type, vehicle_hours_at_maintenance, vehicle_km_at_maintenance,
                cost, parts_replaced, next_maintenance_hours, next_maintenance_km, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(request.performed_by_user_id)
        .bind(request.maintenance_date)
        .bind(request.description.trim())
        .bind(request.maintenance_type)
        .bind(effects.hours_at)
        .bind(effects.km_at)
        .bind(request.cost)
        .bind(&request.parts_replaced)
        .bind(request.next_maintenance_hours)
        .bind(request.next_maintenance_km)
        .bind(&request.notes)
        .fetch_one(&mut *tx)
        .await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET last_maintenance = $2,
                next_maintenance_hours = $3,
                next_maintenance_km = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(effects.last_maintenance)
        .bind(effects.next_maintenance_hours)
        .bind(effects.next_maintenance_km)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "🔧 Mantenimiento {} registrado para {} ({})",
            record.maintenance_type, vehicle.name, vehicle.id
        );
        Ok(Some((record, vehicle)))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE vehicle_id = $1 ORDER BY maintenance_date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
