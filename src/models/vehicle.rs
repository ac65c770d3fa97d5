//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle con sus contadores de uso
//! acumulado y los umbrales del próximo mantenimiento.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::vehicle_category::VehicleCategory;
use super::vehicle_status::VehicleStatus;
use super::vehicle_type::VehicleType;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub vehicle_type: VehicleType,
    pub chassis_number: Option<String>,
    pub engine_number: Option<String>,
    pub registration_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year_manufactured: Option<i32>,
    pub total_hours: Decimal,
    pub total_kilometers: Decimal,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance_hours: Option<Decimal>,
    pub next_maintenance_km: Option<Decimal>,
    pub status: VehicleStatus,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Debe pasar mantenimiento si alcanzó cualquiera de los umbrales definidos.
    /// Un umbral sin definir nunca se cumple.
    pub fn needs_maintenance(&self) -> bool {
        if let Some(threshold) = self.next_maintenance_hours {
            if self.total_hours >= threshold {
                return true;
            }
        }
        if let Some(threshold) = self.next_maintenance_km {
            if self.total_kilometers >= threshold {
                return true;
            }
        }
        false
    }

    // Sin validación: signo y máximo se comprueban antes de sumar
    pub fn add_hours(&mut self, hours: Decimal) {
        self.total_hours += hours;
    }

    pub fn add_kilometers(&mut self, kilometers: Decimal) {
        self.total_kilometers += kilometers;
    }

    pub fn category(&self) -> VehicleCategory {
        self.vehicle_type.category()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    pub(crate) fn vehicle(vehicle_type: VehicleType) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            name: "Dallara F3 #7".to_string(),
            vehicle_type,
            chassis_number: None,
            engine_number: None,
            registration_number: None,
            manufacturer: Some("Dallara".to_string()),
            model: Some("F3 2019".to_string()),
            year_manufactured: Some(2019),
            total_hours: Decimal::ZERO,
            total_kilometers: Decimal::ZERO,
            last_maintenance: None,
            next_maintenance_hours: None,
            next_maintenance_km: None,
            status: VehicleStatus::Available,
            notes: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_thresholds_never_needs_maintenance() {
        let mut v = vehicle(VehicleType::Formula3);
        v.total_hours = dec(10_000);
        v.total_kilometers = dec(1_000_000);
        assert!(!v.needs_maintenance());
    }

    #[test]
    fn test_hours_threshold() {
        let mut v = vehicle(VehicleType::Formula3);
        v.next_maintenance_hours = Some(dec(50));
        v.total_hours = dec(49);
        assert!(!v.needs_maintenance());
        v.total_hours = dec(50);
        assert!(v.needs_maintenance());
    }

    #[test]
    fn test_km_threshold_alone_triggers() {
        let mut v = vehicle(VehicleType::Motogp);
        v.next_maintenance_hours = Some(dec(100));
        v.next_maintenance_km = Some(dec(2_000));
        v.total_hours = dec(1);
        v.total_kilometers = dec(2_500);
        assert!(v.needs_maintenance());
    }

    #[test]
    fn test_add_usage_accumulates() {
        let mut v = vehicle(VehicleType::Gt3);
        v.add_hours(Decimal::new(15, 1));
        v.add_hours(Decimal::new(25, 1));
        v.add_kilometers(dec(120));
        assert_eq!(v.total_hours, dec(4));
        assert_eq!(v.total_kilometers, dec(120));
    }

    #[test]
    fn test_category_from_type() {
        assert_eq!(vehicle(VehicleType::Wrc).category(), VehicleCategory::Car);
        assert_eq!(vehicle(VehicleType::Mxgp).category(), VehicleCategory::Motorcycle);
    }
}
