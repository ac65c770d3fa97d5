use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceRecordResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/maintenance", get(list_records).post(create_record))
        .route("/maintenance/:id", get(get_record).delete(delete_record))
}

async fn list_records(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRecordResponse>>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_by_vehicle(&user, vehicle_id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRecordResponse>>), AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(&user, vehicle_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Registro de mantenimiento eliminado")))
}
