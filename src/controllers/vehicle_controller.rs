use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, RecordUsageRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{Capability, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::AuthorizationService;
use crate::utils::errors::{not_found_error, validation_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    async fn find_visible(&self, user: &AuthenticatedUser, id: Uuid) -> Result<Vehicle, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        AuthorizationService::ensure_same_team(user, vehicle.team_id)?;
        Ok(vehicle)
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        team_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        AuthorizationService::ensure_team_capability(user, team_id, Capability::ManageVehicles)?;

        let vehicle = self.repository.create(team_id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente",
        ))
    }

    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: Uuid) -> Result<VehicleResponse, AppError> {
        Ok(self.find_visible(user, id).await?.into())
    }

    pub async fn list_by_team(
        &self,
        user: &AuthenticatedUser,
        team_id: Uuid,
        filters: VehicleFilters,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        AuthorizationService::ensure_same_team(user, team_id)?;

        let vehicles = self.repository.find_by_team(team_id).await?;

        Ok(vehicles
            .into_iter()
            .filter(|vehicle| filters.matches(vehicle))
            .map(VehicleResponse::from)
            .collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageVehicles)?;

        let vehicle = self
            .repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente",
        ))
    }

    pub async fn record_usage(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: RecordUsageRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        if request.is_empty() {
            return Err(validation_error("hours", "Indica horas o kilómetros de uso"));
        }

        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageVehicles)?;

        let vehicle = self
            .repository
            .record_usage(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        let message = if vehicle.needs_maintenance() {
            "Uso registrado. El vehículo necesita mantenimiento"
        } else {
            "Uso registrado exitosamente"
        };

        Ok(ApiResponse::success_with_message(vehicle.into(), message))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageVehicles)?;

        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle", id));
        }
        Ok(())
    }
}
