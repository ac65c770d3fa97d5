use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{MaintenanceRecord, MaintenanceType, Vehicle};
use crate::utils::validation::{validate_decimal_amount, validate_not_blank};

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub maintenance_date: DateTime<Utc>,

    #[validate(length(min = 1, max = 500), custom = "validate_not_blank")]
    pub description: String,

    pub maintenance_type: MaintenanceType,

    pub performed_by_user_id: Option<Uuid>,

    #[validate(custom = "validate_decimal_amount")]
    pub vehicle_hours_at_maintenance: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub vehicle_km_at_maintenance: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub cost: Option<Decimal>,

    #[validate(length(max = 1000))]
    pub parts_replaced: Option<String>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_hours: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_km: Option<Decimal>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Lecturas del registro y estado del vehículo tras el mantenimiento
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceEffects {
    pub hours_at: Decimal,
    pub km_at: Decimal,
    pub last_maintenance: DateTime<Utc>,
    pub next_maintenance_hours: Option<Decimal>,
    pub next_maintenance_km: Option<Decimal>,
}

impl CreateMaintenanceRequest {
    /// Lecturas omitidas toman los totales del vehículo; la fecha del último
    /// mantenimiento sólo avanza y los umbrales nuevos sustituyen a los anteriores.
    pub fn effects_on(&self, vehicle: &Vehicle) -> MaintenanceEffects {
        let last_maintenance = match vehicle.last_maintenance {
            Some(last) if last >= self.maintenance_date => last,
            _ => self.maintenance_date,
        };

        MaintenanceEffects {
            hours_at: self.vehicle_hours_at_maintenance.unwrap_or(vehicle.total_hours),
            km_at: self.vehicle_km_at_maintenance.unwrap_or(vehicle.total_kilometers),
            last_maintenance,
            next_maintenance_hours: self.next_maintenance_hours.or(vehicle.next_maintenance_hours),
            next_maintenance_km: self.next_maintenance_km.or(vehicle.next_maintenance_km),
        }
    }
}

// Response de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub performed_by_user_id: Option<Uuid>,
    pub maintenance_date: DateTime<Utc>,
    pub description: String,
    pub maintenance_type: MaintenanceType,
    pub maintenance_type_name: &'static str,
    pub scheduled: bool,
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

impl From<MaintenanceRecord> for MaintenanceRecordResponse {
    fn from(record: MaintenanceRecord) -> Self {
        Self {
            maintenance_type_name: record.maintenance_type.display_name(),
            scheduled: record.maintenance_type.is_scheduled(),
            id: record.id,
            vehicle_id: record.vehicle_id,
            performed_by_user_id: record.performed_by_user_id,
            maintenance_date: record.maintenance_date,
            description: record.description,
            maintenance_type: record.maintenance_type,
            vehicle_hours_at_maintenance: record.vehicle_hours_at_maintenance,
            vehicle_km_at_maintenance: record.vehicle_km_at_maintenance,
            cost: record.cost,
            parts_replaced: record.parts_replaced,
            next_maintenance_hours: record.next_maintenance_hours,
            next_maintenance_km: record.next_maintenance_km,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::tests::vehicle;
    use crate::models::VehicleType;
    use chrono::TimeZone;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "maintenance_date": "2024-03-10T09:00:00Z",
            "description": "Cambio de aceite y filtros",
            "maintenance_type": "PREVENTIVE",
            "cost": "180.50",
            "next_maintenance_hours": "60"
        })
    }

    #[test]
    fn test_create_maintenance_request_valid() {
        let request: CreateMaintenanceRequest = serde_json::from_value(payload()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.maintenance_type, MaintenanceType::Preventive);
        assert_eq!(request.cost, Some(Decimal::new(18050, 2)));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let mut body = payload();
        body["cost"] = json!("-10");
        let request: CreateMaintenanceRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cost"));
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let mut body = payload();
        body["description"] = json!(" ");
        let request: CreateMaintenanceRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_date_is_required() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("maintenance_date");
        assert!(serde_json::from_value::<CreateMaintenanceRequest>(body).is_err());
    }

    fn serviced_vehicle() -> Vehicle {
        let mut v = vehicle(VehicleType::Formula3);
        v.total_hours = Decimal::from(42);
        v.total_kilometers = Decimal::from(3_100);
        v.last_maintenance = Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
        v.next_maintenance_hours = Some(Decimal::from(50));
        v.next_maintenance_km = Some(Decimal::from(4_000));
        v
    }

    #[test]
    fn test_omitted_readings_default_to_vehicle_totals() {
        let request: CreateMaintenanceRequest = serde_json::from_value(payload()).unwrap();
        let effects = request.effects_on(&serviced_vehicle());
        assert_eq!(effects.hours_at, Decimal::from(42));
        assert_eq!(effects.km_at, Decimal::from(3_100));
    }

    #[test]
    fn test_explicit_readings_are_kept() {
        let mut body = payload();
        body["vehicle_hours_at_maintenance"] = json!("40.5");
        body["vehicle_km_at_maintenance"] = json!("3000");
        let request: CreateMaintenanceRequest = serde_json::from_value(body).unwrap();
        let effects = request.effects_on(&serviced_vehicle());
        assert_eq!(effects.hours_at, Decimal::new(405, 1));
        assert_eq!(effects.km_at, Decimal::from(3_000));
    }

    #[test]
    fn test_newer_record_moves_last_maintenance() {
        let request: CreateMaintenanceRequest = serde_json::from_value(payload()).unwrap();
        let effects = request.effects_on(&serviced_vehicle());
        assert_eq!(effects.last_maintenance, request.maintenance_date);
    }

    #[test]
    fn test_older_record_keeps_last_maintenance() {
        let mut body = payload();
        body["maintenance_date"] = json!("2024-01-15T09:00:00Z");
        let request: CreateMaintenanceRequest = serde_json::from_value(body).unwrap();
        let vehicle = serviced_vehicle();
        let effects = request.effects_on(&vehicle);
        assert_eq!(Some(effects.last_maintenance), vehicle.last_maintenance);
    }

    #[test]
    fn test_first_record_sets_last_maintenance() {
        let request: CreateMaintenanceRequest = serde_json::from_value(payload()).unwrap();
        let mut vehicle = serviced_vehicle();
        vehicle.last_maintenance = None;
        let effects = request.effects_on(&vehicle);
        assert_eq!(effects.last_maintenance, request.maintenance_date);
    }

    #[test]
    fn test_new_thresholds_replace_and_omitted_ones_stay() {
        let request: CreateMaintenanceRequest = serde_json::from_value(payload()).unwrap();
        let effects = request.effects_on(&serviced_vehicle());
        assert_eq!(effects.next_maintenance_hours, Some(Decimal::from(60)));
        assert_eq!(effects.next_maintenance_km, Some(Decimal::from(4_000)));
    }
}
