pub mod event_routes;
pub mod maintenance_routes;
pub mod reference_routes;
pub mod team_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::Json;
use serde_json::{json, Value};

/// Health check, sin base de datos
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
