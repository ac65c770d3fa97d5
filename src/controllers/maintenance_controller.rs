use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceRecordResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{Capability, MaintenanceRecord, Vehicle};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::AuthorizationService;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct MaintenanceController {
    records: MaintenanceRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            records: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    async fn find_vehicle(&self, user: &AuthenticatedUser, vehicle_id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        AuthorizationService::ensure_same_team(user, vehicle.team_id)?;
        Ok(vehicle)
    }

    async fn find_record(&self, user: &AuthenticatedUser, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        let record = self
            .records
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("MaintenanceRecord", id))?;

        self.find_vehicle(user, record.vehicle_id).await?;
        Ok(record)
    }

    pub async fn list_by_vehicle(
        &self,
        user: &AuthenticatedUser,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceRecordResponse>, AppError> {
        self.find_vehicle(user, vehicle_id).await?;

        let records = self.records.find_by_vehicle(vehicle_id).await?;
        Ok(records.into_iter().map(MaintenanceRecordResponse::from).collect())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        vehicle_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecordResponse>, AppError> {
        request.validate()?;
        let vehicle = self.find_vehicle(user, vehicle_id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageVehicles)?;

        if let Some(performer) = request.performed_by_user_id {
            if !self.users.all_in_team(&[performer], vehicle.team_id).await? {
                return Err(bad_request_error("El mecánico indicado no pertenece al equipo"));
            }
        }

        let (record, vehicle) = self
            .records
            .create(vehicle_id, request)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        let message = if vehicle.needs_maintenance() {
            "Mantenimiento registrado. El vehículo sigue por encima de sus umbrales"
        } else {
            "Mantenimiento registrado exitosamente"
        };

        Ok(ApiResponse::success_with_message(record.into(), message))
    }

    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: Uuid) -> Result<MaintenanceRecordResponse, AppError> {
        Ok(self.find_record(user, id).await?.into())
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        self.find_record(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageVehicles)?;

        if !self.records.delete(id).await? {
            return Err(not_found_error("MaintenanceRecord", id));
        }
        Ok(())
    }
}
