//! Catálogos de valores fijos. No necesitan base de datos ni identificación.

use axum::{extract::Query, routing::get, Json, Router};

use crate::dto::reference_dto::{ReferenceItem, VehicleTypeQuery};
use crate::dto::ApiResponse;
use crate::models::{
    EventStatus, EventType, MaintenanceType, UserRole, VehicleCategory, VehicleStatus, VehicleType,
};
use crate::state::AppState;

type ReferenceList = Json<ApiResponse<Vec<ReferenceItem>>>;

pub fn create_reference_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle-categories", get(vehicle_categories))
        .route("/vehicle-types", get(vehicle_types))
        .route("/vehicle-statuses", get(vehicle_statuses))
        .route("/user-roles", get(user_roles))
        .route("/event-types", get(event_types))
        .route("/event-statuses", get(event_statuses))
        .route("/maintenance-types", get(maintenance_types))
}

fn list<T: Into<ReferenceItem>>(values: impl IntoIterator<Item = T>) -> ReferenceList {
    Json(ApiResponse::success(values.into_iter().map(Into::into).collect()))
}

async fn vehicle_categories() -> ReferenceList {
    list(VehicleCategory::ALL)
}

async fn vehicle_types(Query(query): Query<VehicleTypeQuery>) -> ReferenceList {
    match query.category {
        Some(category) => list(VehicleType::by_category(category)),
        None => list(VehicleType::ALL),
    }
}

async fn vehicle_statuses() -> ReferenceList {
    list(VehicleStatus::ALL)
}

async fn user_roles() -> ReferenceList {
    list(UserRole::ALL)
}

async fn event_types() -> ReferenceList {
    list(EventType::ALL)
}

async fn event_statuses() -> ReferenceList {
    list(EventStatus::ALL)
}

async fn maintenance_types() -> ReferenceList {
    list(MaintenanceType::ALL)
}
