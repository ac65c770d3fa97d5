use serde::Serialize;
use uuid::Uuid;

use super::event_dto::EventResponse;

// Resumen del equipo para la pantalla principal
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub team_id: Uuid,
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    pub vehicles_needing_maintenance: usize,
    pub total_users: usize,
    pub total_events: usize,
    pub upcoming_events: usize,
    pub next_events: Vec<EventResponse>,
}
