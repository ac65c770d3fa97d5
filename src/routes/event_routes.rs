use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::event_controller::EventController;
use crate::dto::event_dto::{CreateEventRequest, EventFilters, EventResponse, UpdateEventRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_event_router() -> Router<AppState> {
    Router::new()
        .route("/teams/:id/events", get(list_events).post(create_event))
        .route("/events/:id", get(get_event).put(update_event).delete(delete_event))
        .route(
            "/events/:id/participants/:user_id",
            put(add_participant).delete(remove_participant),
        )
        .route(
            "/events/:id/vehicles/:vehicle_id",
            put(add_vehicle).delete(remove_vehicle),
        )
}

async fn list_events(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
    Query(filters): Query<EventFilters>,
) -> Result<Json<ApiResponse<Vec<EventResponse>>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.list_by_team(&user, team_id, filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EventResponse>>), AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.create(&user, team_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_event(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Evento eliminado exitosamente")))
}

async fn add_participant(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.add_participant(&user, id, user_id).await?;
    Ok(Json(response))
}

async fn remove_participant(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.remove_participant(&user, id, user_id).await?;
    Ok(Json(response))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.add_vehicle(&user, id, vehicle_id).await?;
    Ok(Json(response))
}

async fn remove_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, vehicle_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<EventResponse>>, AppError> {
    let controller = EventController::new(state.pool.clone());
    let response = controller.remove_vehicle(&user, id, vehicle_id).await?;
    Ok(Json(response))
}
