use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Vehicle, VehicleCategory, VehicleStatus, VehicleType};
use crate::utils::validation::{validate_decimal_amount, validate_not_blank};

// Request para crear vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    pub vehicle_type: VehicleType,

    #[validate(length(max = 50))]
    pub chassis_number: Option<String>,

    #[validate(length(max = 50))]
    pub engine_number: Option<String>,

    #[validate(length(max = 20))]
    pub registration_number: Option<String>,

    #[validate(length(max = 100))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year_manufactured: Option<i32>,

    #[validate(custom = "validate_decimal_amount")]
    pub total_hours: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub total_kilometers: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_hours: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_km: Option<Decimal>,

    pub status: Option<VehicleStatus>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

// Request para actualizar vehículo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: Option<String>,

    pub vehicle_type: Option<VehicleType>,

    #[validate(length(max = 50))]
    pub chassis_number: Option<String>,

    #[validate(length(max = 50))]
    pub engine_number: Option<String>,

    #[validate(length(max = 20))]
    pub registration_number: Option<String>,

    #[validate(length(max = 100))]
    pub manufacturer: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year_manufactured: Option<i32>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_hours: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub next_maintenance_km: Option<Decimal>,

    pub status: Option<VehicleStatus>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,

    pub active: Option<bool>,
}

// Uso acumulado tras una sesión (horas y/o kilómetros)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecordUsageRequest {
    #[validate(custom = "validate_decimal_amount")]
    pub hours: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub kilometers: Option<Decimal>,
}

impl RecordUsageRequest {
    pub fn is_empty(&self) -> bool {
        self.hours.is_none() && self.kilometers.is_none()
    }
}

// Filtros del listado de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub category: Option<VehicleCategory>,
    pub status: Option<VehicleStatus>,
    pub active: Option<bool>,
}

impl VehicleFilters {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.category.map_or(true, |category| vehicle.category() == category)
            && self.status.map_or(true, |status| vehicle.status == status)
            && self.active.map_or(true, |active| vehicle.active == active)
    }
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub vehicle_type: VehicleType,
    pub vehicle_type_name: &'static str,
    pub category: VehicleCategory,
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
    pub needs_maintenance: bool,
    pub status: VehicleStatus,
    pub status_name: &'static str,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_type_name: vehicle.vehicle_type.display_name(),
            category: vehicle.category(),
            needs_maintenance: vehicle.needs_maintenance(),
            status_name: vehicle.status.display_name(),
            id: vehicle.id,
            team_id: vehicle.team_id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            chassis_number: vehicle.chassis_number,
            engine_number: vehicle.engine_number,
            registration_number: vehicle.registration_number,
            manufacturer: vehicle.manufacturer,
            model: vehicle.model,
            year_manufactured: vehicle.year_manufactured,
            total_hours: vehicle.total_hours,
            total_kilometers: vehicle.total_kilometers,
            last_maintenance: vehicle.last_maintenance,
            next_maintenance_hours: vehicle.next_maintenance_hours,
            next_maintenance_km: vehicle.next_maintenance_km,
            status: vehicle.status,
            notes: vehicle.notes,
            active: vehicle.active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::tests::vehicle;
    use serde_json::json;

    #[test]
    fn test_create_vehicle_request_valid() {
        let request: CreateVehicleRequest = serde_json::from_value(json!({
            "name": "Dallara F3 #7",
            "vehicle_type": "FORMULA_3",
            "year_manufactured": 2022,
            "total_hours": "12.5"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.vehicle_type, VehicleType::Formula3);
    }

    #[test]
    fn test_create_vehicle_request_rejects_negative_totals() {
        let request: CreateVehicleRequest = serde_json::from_value(json!({
            "name": "Yamaha R6",
            "vehicle_type": "SUPERSPORT",
            "total_kilometers": "-1"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("total_kilometers"));
    }

    #[test]
    fn test_create_vehicle_request_rejects_year_and_notes() {
        let request: CreateVehicleRequest = serde_json::from_value(json!({
            "name": "Histórico",
            "vehicle_type": "HISTORIC_RALLY",
            "year_manufactured": 1850,
            "notes": "n".repeat(1001)
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year_manufactured"));
        assert!(fields.contains_key("notes"));
    }

    #[test]
    fn test_record_usage_request() {
        let usage = RecordUsageRequest {
            hours: Some(Decimal::new(25, 1)),
            kilometers: None,
        };
        assert!(usage.validate().is_ok());
        assert!(!usage.is_empty());

        let negative = RecordUsageRequest {
            hours: Some(Decimal::new(-5, 1)),
            kilometers: None,
        };
        assert!(negative.validate().is_err());
        assert!(RecordUsageRequest::default().is_empty());
    }

    #[test]
    fn test_record_usage_request_rejects_amounts_above_column_limit() {
        let huge: RecordUsageRequest =
            serde_json::from_value(json!({ "hours": "79228162514264337593543950335" })).unwrap();
        let errors = huge.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hours"));

        let too_many_km: RecordUsageRequest =
            serde_json::from_value(json!({ "kilometers": "1000000000" })).unwrap();
        assert!(too_many_km.validate().is_err());
    }

    #[test]
    fn test_filters_match_by_category_status_and_active() {
        let car = vehicle(VehicleType::Gt3);
        let bike = vehicle(VehicleType::Motogp);

        let cars = VehicleFilters {
            category: Some(VehicleCategory::Car),
            ..Default::default()
        };
        assert!(cars.matches(&car));
        assert!(!cars.matches(&bike));

        let in_repair = VehicleFilters {
            status: Some(VehicleStatus::Repair),
            ..Default::default()
        };
        assert!(!in_repair.matches(&car));

        let inactive = VehicleFilters {
            active: Some(false),
            ..Default::default()
        };
        assert!(!inactive.matches(&car));
        assert!(VehicleFilters::default().matches(&bike));
    }

    #[test]
    fn test_response_exposes_derived_fields() {
        let mut car = vehicle(VehicleType::Gt3);
        car.total_hours = Decimal::from(50);
        car.next_maintenance_hours = Some(Decimal::from(40));

        let response = VehicleResponse::from(car);
        assert_eq!(response.category, VehicleCategory::Car);
        assert!(response.needs_maintenance);
        assert_eq!(response.vehicle_type_name, VehicleType::Gt3.display_name());
    }
}
