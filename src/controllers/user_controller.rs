use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, PermissionsResponse, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{Capability, User};
use crate::repositories::user_repository::UserRepository;
use crate::services::AuthorizationService;
use crate::utils::errors::{not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    async fn find_visible(&self, user: &AuthenticatedUser, id: Uuid) -> Result<User, AppError> {
        let member = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        AuthorizationService::ensure_same_team(user, member.team_id)?;
        Ok(member)
    }

    pub async fn list_by_team(&self, user: &AuthenticatedUser, team_id: Uuid) -> Result<Vec<UserResponse>, AppError> {
        AuthorizationService::ensure_same_team(user, team_id)?;

        let users = self.repository.find_by_team(team_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        team_id: Uuid,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;
        AuthorizationService::ensure_team_capability(user, team_id, Capability::ManageTeam)?;

        let member = self.repository.create(team_id, &request).await?;

        Ok(ApiResponse::success_with_message(
            member.into(),
            "Miembro añadido al equipo",
        ))
    }

    pub async fn get_by_id(&self, user: &AuthenticatedUser, id: Uuid) -> Result<UserResponse, AppError> {
        Ok(self.find_visible(user, id).await?.into())
    }

    pub async fn permissions(&self, user: &AuthenticatedUser, id: Uuid) -> Result<PermissionsResponse, AppError> {
        let member = self.find_visible(user, id).await?;
        Ok(PermissionsResponse::from(&member))
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageTeam)?;

        let member = self
            .repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        Ok(ApiResponse::success_with_message(
            member.into(),
            "Miembro actualizado exitosamente",
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        self.find_visible(user, id).await?;
        AuthorizationService::ensure_capability(user, Capability::ManageTeam)?;

        if !self.repository.delete(id).await? {
            return Err(not_found_error("User", id));
        }
        Ok(())
    }
}
