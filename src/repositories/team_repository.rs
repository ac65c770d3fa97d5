use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::user_repository::UserRepository;
use crate::dto::team_dto::{CreateTeamRequest, UpdateTeamRequest};
use crate::dto::user_dto::CreateUserRequest;
use crate::models::{Team, User};
use crate::utils::errors::AppError;

pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta del equipo y de su primer manager en la misma transacción
    pub async fn create_with_manager(&self, request: CreateTeamRequest) -> Result<(Team, User), AppError> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (
                id, name, description, logo_url, primary_category,
                contact_email, contact_phone, headquarters_location
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.logo_url)
        .bind(request.primary_category)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(&request.headquarters_location)
        .fetch_one(&mut *tx)
        .await?;

        let manager = CreateUserRequest::from(request.manager);
        let manager = UserRepository::insert(&mut tx, team.id, &manager).await?;

        tx.commit().await?;

        info!("🏁 Equipo creado: {} ({})", team.name, team.id);
        Ok((team, manager))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(team)
    }

    pub async fn update(&self, id: Uuid, request: UpdateTeamRequest) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                logo_url = COALESCE($4, logo_url),
                primary_category = COALESCE($5, primary_category),
                contact_email = COALESCE($6, contact_email),
                contact_phone = COALESCE($7, contact_phone),
                headquarters_location = COALESCE($8, headquarters_location),
                active = COALESCE($9, active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.description)
        .bind(request.logo_url)
        .bind(request.primary_category)
        .bind(request.contact_email)
        .bind(request.contact_phone)
        .bind(request.headquarters_location)
        .bind(request.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    /// Borra el equipo; miembros, vehículos y eventos caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
