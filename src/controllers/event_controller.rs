use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::event_dto::{CreateEventRequest, EventFilters, EventResponse, UpdateEventRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{Capability, Event};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::AuthorizationService;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct EventController {
    events: EventRepository,
    users: UserRepository,
    vehicles: VehicleRepository,
}

impl EventController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    fn respond(user: &AuthenticatedUser, event: Event) -> EventResponse {
        EventResponse::from_event(event, AuthorizationService::can_view_finances(user), Utc::now())
    }

    async fn find_visible(&self, user: &AuthenticatedUser, id: Uuid) -> Result<Event, AppError> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Event", id))?;

        AuthorizationService::ensure_same_team(user, event.team_id)?;
        Ok(event)
    }

    // Participantes y vehículos deben ser del mismo equipo que el evento
    async fn ensure_members(&self, team_id: Uuid, participant_ids: &[Uuid], vehicle_ids: &[Uuid]) -> Result<(), AppError> {
        if !self.users.all_in_team(participant_ids, team_id).await? {
            return Err(bad_request_error("Algún participante no pertenece al equipo"));
        }
        if !self.vehicles.all_in_team(vehicle_ids, team_id).await? {
            return Err(bad_request_error("Algún vehículo no pertenece al equipo"));
        }
        Ok(())
    }

    pub async fn list_by_team(
        &self,
        user: &AuthenticatedUser,
        team_id: Uuid,
        filters: EventFilters,
    ) -> Result<Vec<EventResponse>, AppError> {
        AuthorizationService::ensure_same_team(user, team_id)?;

        let now = Utc::now();
        let can_view_finances = AuthorizationService::can_view_finances(user);
        let events = self.events.find_by_team(team_id).await?;

        Ok(events
            .into_iter()
            .filter(|event| filters.when.map_or(true, |window| window.matches(event, now)))
            .map(|event| EventResponse::from_event(event, can_view_finances, now))
            .collect())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        team_id: Uuid,
        mut request: CreateEventRequest,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        request.validate()?;
        AuthorizationService::ensure_team_capability(user, team_id, Capability::ManageEvents)?;
        if request.touches_finances() {
            AuthorizationService::ensure_capability(user, Capability::ManageFinances)?;
        }

        request.participant_ids = unique_ids(request.participant_ids);
        request.vehicle_ids = unique_ids(request.vehicle_ids);
        self.ensure_members(team_id, &request.participant_ids, &request.vehicle_ids)
            .await?;

        let event = self.events.create(team_id, request).await?;

        Ok(ApiResponse::success_with_message(
            Self::respond(user, event),
            "Evento creado exitosamente",
        ))
    }

    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: Uuid) -> Result<EventResponse, AppError> {
        let event = self.find_visible(user, id).await?;
        Ok(Self::respond(user, event))
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        mut request: UpdateEventRequest,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        request.validate()?;
        let current = self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;
        if request.touches_finances() {
            AuthorizationService::ensure_capability(user, Capability::ManageFinances)?;
        }

        request.participant_ids = request.participant_ids.map(unique_ids);
        request.vehicle_ids = request.vehicle_ids.map(unique_ids);
        self.ensure_members(
            current.team_id,
            request.participant_ids.as_deref().unwrap_or_default(),
            request.vehicle_ids.as_deref().unwrap_or_default(),
        )
        .await?;

        let event = self
            .events
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Event", id))?;

        Ok(ApiResponse::success_with_message(
            Self::respond(user, event),
            "Evento actualizado exitosamente",
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;

        if !self.events.delete(id).await? {
            return Err(not_found_error("Event", id));
        }
        Ok(())
    }

    pub async fn add_participant(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        let event = self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;
        self.ensure_members(event.team_id, &[user_id], &[]).await?;

        let added = self.events.add_participant(id, user_id).await?;
        let message = if added {
            "Participante añadido al evento"
        } else {
            "El usuario ya participaba en el evento"
        };

        self.reload(user, id, message).await
    }

    pub async fn remove_participant(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;

        let removed = self.events.remove_participant(id, user_id).await?;
        let message = if removed {
            "Participante retirado del evento"
        } else {
            "El usuario no participaba en el evento"
        };

        self.reload(user, id, message).await
    }

    pub async fn add_vehicle(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        let event = self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;
        self.ensure_members(event.team_id, &[], &[vehicle_id]).await?;

        let added = self.events.add_vehicle(id, vehicle_id).await?;
        let message = if added {
            "Vehículo asignado al evento"
        } else {
            "El vehículo ya estaba asignado al evento"
        };

        self.reload(user, id, message).await
    }

    pub async fn remove_vehicle(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageEvents)?;

        let removed = self.events.remove_vehicle(id, vehicle_id).await?;
        let message = if removed {
            "Vehículo retirado del evento"
        } else {
            "El vehículo no estaba asignado al evento"
        };

        self.reload(user, id, message).await
    }

    async fn reload(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        message: &str,
    ) -> Result<ApiResponse<EventResponse>, AppError> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Event", id))?;

        Ok(ApiResponse::success_with_message(
            Self::respond(user, event),
            message,
        ))
    }
}

/// Quita duplicados conservando el orden de llegada
fn unique_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_keeps_first_occurrence_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        assert_eq!(unique_ids(vec![b, a, b, c, a]), vec![b, a, c]);
        assert!(unique_ids(Vec::new()).is_empty());
    }
}
