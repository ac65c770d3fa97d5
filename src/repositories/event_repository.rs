use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::dto::event_dto::{CreateEventRequest, UpdateEventRequest};
use crate::models::Event;
use crate::utils::errors::AppError;

pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, team_id: Uuid, request: CreateEventRequest) -> Result<Event, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                id, team_id, name, description, event_type, start_date, end_date,
                location, circuit_name, address, coordinates, status,
                external_calendar_id, weather_conditions, notes, budget_allocated, actual_cost
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(request.event_type)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.location)
        .bind(&request.circuit_name)
        .bind(&request.address)
        .bind(&request.coordinates)
        .bind(request.status.unwrap_or_default())
        .bind(&request.external_calendar_id)
        .bind(&request.weather_conditions)
        .bind(&request.notes)
        .bind(request.budget_allocated)
        .bind(request.actual_cost)
        .fetch_one(&mut *tx)
        .await?;

        for user_id in request.participant_ids {
            if event.add_participant(user_id) {
                insert_participant(&mut tx, event.id, user_id).await?;
            }
        }
        for vehicle_id in request.vehicle_ids {
            if event.add_vehicle(vehicle_id) {
                insert_vehicle(&mut tx, event.id, vehicle_id).await?;
            }
        }

        tx.commit().await?;

        info!("📅 Evento creado: {} ({})", event.name, event.id);
        Ok(event)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match event {
            Some(event) => {
                let mut events = [event];
                self.load_associations(&mut events).await?;
                let [event] = events;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    /// Eventos del equipo ordenados por fecha de inicio, con sus asociaciones
    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Event>, AppError> {
        let mut events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE team_id = $1 ORDER BY start_date",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        self.load_associations(&mut events).await?;
        Ok(events)
    }

    async fn load_associations(&self, events: &mut [Event]) -> Result<(), AppError> {
        if events.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = events.iter().map(|event| event.id).collect();

        let participants: Vec<(Uuid, Uuid)> = sqlx::query_as(
            "SELECT event_id, user_id FROM event_participants WHERE event_id = ANY($1) ORDER BY position",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let vehicles: Vec<(Uuid, Uuid)> = sqlx::query_as(
            "SELECT event_id, vehicle_id FROM event_vehicles WHERE event_id = ANY($1) ORDER BY position",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_event: HashMap<Uuid, &mut Event> =
            events.iter_mut().map(|event| (event.id, event)).collect();

        for (event_id, user_id) in participants {
            if let Some(event) = by_event.get_mut(&event_id) {
                event.add_participant(user_id);
            }
        }
        for (event_id, vehicle_id) in vehicles {
            if let Some(event) = by_event.get_mut(&event_id) {
                event.add_vehicle(vehicle_id);
            }
        }

        Ok(())
    }

    /// Actualiza los campos presentes. Las listas recibidas sustituyen a las guardadas
    pub async fn update(&self, id: Uuid, request: UpdateEventRequest) -> Result<Option<Event>, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                event_type = COALESCE($4, event_type),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                location = COALESCE($7, location),
                circuit_name = COALESCE($8, circuit_name),
                address = COALESCE($9, address),
                coordinates = COALESCE($10, coordinates),
                status = COALESCE($11, status),
                external_calendar_id = COALESCE($12, external_calendar_id),
                weather_conditions = COALESCE($13, weather_conditions),
                notes = COALESCE($14, notes),
                budget_allocated = COALESCE($15, budget_allocated),
                actual_cost = COALESCE($16, actual_cost),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.description)
        .bind(request.event_type)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.location)
        .bind(request.circuit_name)
        .bind(request.address)
        .bind(request.coordinates)
        .bind(request.status)
        .bind(request.external_calendar_id)
        .bind(request.weather_conditions)
        .bind(request.notes)
        .bind(request.budget_allocated)
        .bind(request.actual_cost)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(participant_ids) = request.participant_ids {
            sqlx::query("DELETE FROM event_participants WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for user_id in participant_ids {
                insert_participant(&mut tx, id, user_id).await?;
            }
        }

        if let Some(vehicle_ids) = request.vehicle_ids {
            sqlx::query("DELETE FROM event_vehicles WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for vehicle_id in vehicle_ids {
                insert_vehicle(&mut tx, id, vehicle_id).await?;
            }
        }

        tx.commit().await?;

        self.find_by_id(id).await
    }

    /// Borra el evento junto con sus participaciones y asignaciones
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// false si el usuario ya participaba
    pub async fn add_participant(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_participant(&mut conn, event_id, user_id).await
    }

    pub async fn remove_participant(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM event_participants WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// false si el vehículo ya estaba asignado
    pub async fn add_vehicle(&self, event_id: Uuid, vehicle_id: Uuid) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_vehicle(&mut conn, event_id, vehicle_id).await
    }

    pub async fn remove_vehicle(&self, event_id: Uuid, vehicle_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM event_vehicles WHERE event_id = $1 AND vehicle_id = $2")
            .bind(event_id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

async fn insert_participant(conn: &mut PgConnection, event_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(
        "INSERT INTO event_participants (event_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(event_id)
    .bind(user_id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

async fn insert_vehicle(conn: &mut PgConnection, event_id: Uuid, vehicle_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query(
        "INSERT INTO event_vehicles (event_id, vehicle_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(event_id)
    .bind(vehicle_id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
