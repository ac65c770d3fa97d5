use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::team_controller::TeamController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::dto::team_dto::{CreateTeamRequest, TeamCreatedResponse, TeamResponse, UpdateTeamRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Alta de equipo, sin identificación previa
pub fn create_bootstrap_router() -> Router<AppState> {
    Router::new().route("/teams", post(create_team))
}

pub fn create_team_router() -> Router<AppState> {
    Router::new()
        .route("/teams/:id", get(get_team).put(update_team).delete(delete_team))
        .route("/teams/:id/dashboard", get(get_dashboard))
}

async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TeamCreatedResponse>>), AppError> {
    let controller = TeamController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TeamResponse>>, AppError> {
    let controller = TeamController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<Json<ApiResponse<TeamResponse>>, AppError> {
    let controller = TeamController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TeamController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Equipo eliminado exitosamente")))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DashboardResponse>>, AppError> {
    let controller = TeamController::new(state.pool.clone());
    let response = controller.dashboard(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}
