use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, RecordUsageRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/teams/:id/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
        .route("/vehicles/:id/usage", post(record_usage))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(&user, team_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_by_team(&user, team_id, filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn record_usage(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordUsageRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.record_usage(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Vehículo eliminado exitosamente")))
}
