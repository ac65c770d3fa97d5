//! Modelo de MaintenanceRecord
//!
//! Entrada de mantenimiento de un vehículo, opcionalmente atribuida al
//! usuario que la realizó.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::maintenance_type::MaintenanceType;

/// MaintenanceRecord - mapea exactamente a la tabla maintenance_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub performed_by_user_id: Option<Uuid>,
    pub maintenance_date: DateTime<Utc>,
    pub description: String,
    pub maintenance_type: MaintenanceType,
    pub vehicle_hours_at_maintenance: Option<Decimal>,
    pub vehicle_km_at_maintenance: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub parts_replaced: Option<String>,
    pub next_maintenance_hours: Option<Decimal>,
    pub next_maintenance_km: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
