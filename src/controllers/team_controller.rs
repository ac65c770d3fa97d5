use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::dto::team_dto::{CreateTeamRequest, TeamCreatedResponse, TeamResponse, UpdateTeamRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::Capability;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{AuthorizationService, DashboardService};
use crate::utils::errors::{not_found_error, AppError};

pub struct TeamController {
    teams: TeamRepository,
    users: UserRepository,
    vehicles: VehicleRepository,
    events: EventRepository,
}

impl TeamController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            teams: TeamRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            events: EventRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTeamRequest) -> Result<ApiResponse<TeamCreatedResponse>, AppError> {
        request.validate()?;

        let (team, manager) = self.teams.create_with_manager(request).await?;

        Ok(ApiResponse::success_with_message(
            TeamCreatedResponse {
                team: team.into(),
                manager: manager.into(),
            },
            "Equipo creado exitosamente",
        ))
    }

    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: Uuid) -> Result<TeamResponse, AppError> {
        AuthorizationService::ensure_same_team(user, id)?;

        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Team", id))?;

        Ok(team.into())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateTeamRequest,
    ) -> Result<ApiResponse<TeamResponse>, AppError> {
        request.validate()?;
        AuthorizationService::ensure_team_capability(user, id, Capability::ManageTeam)?;

        let team = self
            .teams
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Team", id))?;

        Ok(ApiResponse::success_with_message(
            team.into(),
            "Equipo actualizado exitosamente",
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        AuthorizationService::ensure_team_capability(user, id, Capability::ManageTeam)?;

        if !self.teams.delete(id).await? {
            return Err(not_found_error("Team", id));
        }
        Ok(())
    }

    pub async fn dashboard(&self, user: &AuthenticatedUser, id: Uuid) -> Result<DashboardResponse, AppError> {
        AuthorizationService::ensure_same_team(user, id)?;

        let vehicles = self.vehicles.find_by_team(id).await?;
        let users = self.users.find_by_team(id).await?;
        let events = self.events.find_by_team(id).await?;

        Ok(DashboardService::summarize(
            id,
            &vehicles,
            &users,
            events,
            AuthorizationService::can_view_finances(user),
            Utc::now(),
        ))
    }
}
