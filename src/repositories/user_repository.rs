use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::models::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Inserción reutilizable dentro de otra transacción
    pub(crate) async fn insert(
        conn: &mut PgConnection,
        team_id: Uuid,
        request: &CreateUserRequest,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                id, team_id, email, first_name, last_name, role,
                phone_number, license_number, license_expiry
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(team_id)
        .bind(request.email.trim().to_lowercase())
        .bind(request.first_name.trim())
        .bind(request.last_name.trim())
        .bind(request.role)
        .bind(&request.phone_number)
        .bind(&request.license_number)
        .bind(request.license_expiry)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }

    pub async fn create(&self, team_id: Uuid, request: &CreateUserRequest) -> Result<User, AppError> {
        let mut conn = self.pool.acquire().await?;
        Self::insert(&mut conn, team_id, request).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE team_id = $1 ORDER BY last_name, first_name",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// true si todos los ids pertenecen a miembros del equipo
    pub async fn all_in_team(&self, ids: &[Uuid], team_id: Uuid) -> Result<bool, AppError> {
        if ids.is_empty() {
            return Ok(true);
        }

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE team_id = $1 AND id = ANY($2)")
                .bind(team_id)
                .bind(ids)
                .fetch_one(&self.pool)
                .await?;

        Ok(count as usize == ids.len())
    }

    pub async fn update(&self, id: Uuid, request: UpdateUserRequest) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                role = COALESCE($5, role),
                phone_number = COALESCE($6, phone_number),
                license_number = COALESCE($7, license_number),
                license_expiry = COALESCE($8, license_expiry),
                active = COALESCE($9, active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.email.map(|email| email.trim().to_lowercase()))
        .bind(request.first_name.as_deref().map(str::trim))
        .bind(request.last_name.as_deref().map(str::trim))
        .bind(request.role)
        .bind(request.phone_number)
        .bind(request.license_number)
        .bind(request.license_expiry)
        .bind(request.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
