use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{CreateUserRequest, PermissionsResponse, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/teams/:id/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/users/:id/permissions", get(get_permissions))
}

async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.list_by_team(&user, team_id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(&user, team_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_permissions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PermissionsResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.permissions(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Miembro eliminado del equipo")))
}
