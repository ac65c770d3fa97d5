use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, RecordUsageRequest, UpdateVehicleRequest};
use crate::models::Vehicle;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::MAX_DECIMAL_AMOUNT;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, team_id: Uuid, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, team_id, name, vehicle_type, chassis_number, engine_number,
                registration_number, manufacturer, model, year_manufactured,
                total_hours, total_kilometers, next_maintenance_hours, next_maintenance_km,
                status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(request.name.trim())
        .bind(request.vehicle_type)
        .bind(request.chassis_number)
        .bind(request.engine_number)
        .bind(request.registration_number)
        .bind(request.manufacturer)
        .bind(request.model)
        .bind(request.year_manufactured)
        .bind(request.total_hours.unwrap_or(Decimal::ZERO))
        .bind(request.total_kilometers.unwrap_or(Decimal::ZERO))
        .bind(request.next_maintenance_hours)
        .bind(request.next_maintenance_km)
        .bind(request.status.unwrap_or_default())
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    // Bloquea la fila hasta el fin de la transacción
    pub(crate) async fn find_for_update(conn: &mut PgConnection, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE team_id = $1 ORDER BY name",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// true si todos los ids pertenecen a vehículos del equipo
    pub async fn all_in_team(&self, ids: &[Uuid], team_id: Uuid) -> Result<bool, AppError> {
        if ids.is_empty() {
            return Ok(true);
        }

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE team_id = $1 AND id = ANY($2)")
                .bind(team_id)
                .bind(ids)
                .fetch_one(&self.pool)
                .await?;

        Ok(count as usize == ids.len())
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = COALESCE($2, name),
                vehicle_type = COALESCE($3, vehicle_type),
                chassis_number = COALESCE($4, chassis_number),
                engine_number = COALESCE($5, engine_number),
                registration_number = COALESCE($6, registration_number),
                manufacturer = COALESCE($7, manufacturer),
                model = COALESCE($8, model),
                year_manufactured = COALESCE($9, year_manufactured),
                next_maintenance_hours = COALESCE($10, next_maintenance_hours),
                next_maintenance_km = COALESCE($11, next_maintenance_km),
                status = COALESCE($12, status),
                notes = COALESCE($13, notes),
                active = COALESCE($14, active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.vehicle_type)
        .bind(request.chassis_number)
        .bind(request.engine_number)
        .bind(request.registration_number)
        .bind(request.manufacturer)
        .bind(request.model)
        .bind(request.year_manufactured)
        .bind(request.next_maintenance_hours)
        .bind(request.next_maintenance_km)
        .bind(request.status)
        .bind(request.notes)
        .bind(request.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Suma horas y kilómetros con la fila bloqueada para no perder incrementos concurrentes
    pub async fn record_usage(&self, id: Uuid, usage: &RecordUsageRequest) -> Result<Option<Vehicle>, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(mut vehicle) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };

        if let Some(hours) = usage.hours {
            ensure_fits(vehicle.total_hours, hours, "horas")?;
            vehicle.add_hours(hours);
        }
        if let Some(kilometers) = usage.kilometers {
            ensure_fits(vehicle.total_kilometers, kilometers, "kilómetros")?;
            vehicle.add_kilometers(kilometers);
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET total_hours = $2, total_kilometers = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle.total_hours)
        .bind(vehicle.total_kilometers)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            "⏱️ Uso registrado en {}: {} h, {} km",
            vehicle.id, vehicle.total_hours, vehicle.total_kilometers
        );
        Ok(Some(vehicle))
    }

    /// Borra el vehículo; mantenimientos y asignaciones a eventos caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// El acumulado tiene que caber en la columna NUMERIC(10, 2)
fn ensure_fits(total: Decimal, amount: Decimal, counter: &str) -> Result<(), AppError> {
    match total.checked_add(amount) {
        Some(sum) if sum <= MAX_DECIMAL_AMOUNT => Ok(()),
        _ => Err(bad_request_error(&format!(
            "El total de {} superaría el máximo permitido ({})",
            counter, MAX_DECIMAL_AMOUNT
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_within_column_limit() {
        assert!(ensure_fits(Decimal::from(10), Decimal::new(25, 1), "horas").is_ok());
        assert!(ensure_fits(Decimal::new(9_999_999_899, 2), Decimal::ONE, "horas").is_ok());
    }

    #[test]
    fn test_usage_over_column_limit_is_bad_request() {
        let error = ensure_fits(MAX_DECIMAL_AMOUNT, Decimal::new(1, 2), "kilómetros").unwrap_err();
        assert!(matches!(error, AppError::BadRequest(_)));
    }

    #[test]
    fn test_usage_overflowing_decimal_is_bad_request() {
        let error = ensure_fits(Decimal::from(10), Decimal::MAX, "horas").unwrap_err();
        assert!(matches!(error, AppError::BadRequest(_)));
    }
}
