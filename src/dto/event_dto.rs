use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Event, EventStatus, EventType};
use crate::utils::validation::{
    validate_coordinates_str, validate_decimal_amount, validate_not_blank,
};

// Request para crear evento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub event_type: EventType,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 255))]
    pub circuit_name: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[validate(custom = "validate_coordinates_str")]
    pub coordinates: Option<String>,

    pub status: Option<EventStatus>,

    #[validate(length(max = 255))]
    pub external_calendar_id: Option<String>,

    #[validate(length(max = 255))]
    pub weather_conditions: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(custom = "validate_decimal_amount")]
    pub budget_allocated: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub actual_cost: Option<Decimal>,

    #[serde(default)]
    pub participant_ids: Vec<Uuid>,

    #[serde(default)]
    pub vehicle_ids: Vec<Uuid>,
}

impl CreateEventRequest {
    pub fn touches_finances(&self) -> bool {
        self.budget_allocated.is_some() || self.actual_cost.is_some()
    }
}

// Request para actualizar evento. Las listas, si vienen, sustituyen a las actuales
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub event_type: Option<EventType>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 255))]
    pub circuit_name: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[validate(custom = "validate_coordinates_str")]
    pub coordinates: Option<String>,

    pub status: Option<EventStatus>,

    #[validate(length(max = 255))]
    pub external_calendar_id: Option<String>,

    #[validate(length(max = 255))]
    pub weather_conditions: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(custom = "validate_decimal_amount")]
    pub budget_allocated: Option<Decimal>,

    #[validate(custom = "validate_decimal_amount")]
    pub actual_cost: Option<Decimal>,

    pub participant_ids: Option<Vec<Uuid>>,

    pub vehicle_ids: Option<Vec<Uuid>>,
}

impl UpdateEventRequest {
    pub fn touches_finances(&self) -> bool {
        self.budget_allocated.is_some() || self.actual_cost.is_some()
    }
}

/// Ventana temporal para filtrar el calendario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventWindow {
    Upcoming,
    Active,
    Past,
}

impl EventWindow {
    pub fn matches(&self, event: &Event, now: DateTime<Utc>) -> bool {
        match self {
            EventWindow::Upcoming => event.is_upcoming_at(now),
            EventWindow::Active => event.is_active_at(now),
            EventWindow::Past => event.is_past_at(now),
        }
    }
}

// Filtros del listado de eventos
#[derive(Debug, Default, Deserialize)]
pub struct EventFilters {
    pub when: Option<EventWindow>,
}

// Response de evento
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub event_type_name: &'static str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_hours: i64,
    pub location: Option<String>,
    pub circuit_name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<String>,
    pub status: EventStatus,
    pub status_name: &'static str,
    pub external_calendar_id: Option<String>,
    pub weather_conditions: Option<String>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_allocated: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<Decimal>,
    pub participant_ids: Vec<Uuid>,
    pub vehicle_ids: Vec<Uuid>,
    pub is_upcoming: bool,
    pub is_active: bool,
    pub is_past: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventResponse {
    /// Los importes sólo se exponen a quien puede ver las finanzas
    pub fn from_event(event: Event, can_view_finances: bool, now: DateTime<Utc>) -> Self {
        let (budget_allocated, actual_cost) = if can_view_finances {
            (event.budget_allocated, event.actual_cost)
        } else {
            (None, None)
        };

        Self {
            event_type_name: event.event_type.display_name(),
            duration_hours: event.duration_in_hours(),
            status_name: event.status.display_name(),
            is_upcoming: event.is_upcoming_at(now),
            is_active: event.is_active_at(now),
            is_past: event.is_past_at(now),
            id: event.id,
            team_id: event.team_id,
            name: event.name,
            description: event.description,
            event_type: event.event_type,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            circuit_name: event.circuit_name,
            address: event.address,
            coordinates: event.coordinates,
            status: event.status,
            external_calendar_id: event.external_calendar_id,
            weather_conditions: event.weather_conditions,
            notes: event.notes,
            budget_allocated,
            actual_cost,
            participant_ids: event.participant_ids,
            vehicle_ids: event.vehicle_ids,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    pub(crate) fn event_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            name: "Test Jerez".to_string(),
            description: None,
            event_type: EventType::Test,
            start_date: start,
            end_date: end,
            location: Some("Jerez de la Frontera".to_string()),
            circuit_name: Some("Circuito de Jerez".to_string()),
            address: None,
            coordinates: Some("36.7083,-6.0342".to_string()),
            status: EventStatus::Confirmed,
            external_calendar_id: None,
            weather_conditions: None,
            notes: None,
            budget_allocated: Some(Decimal::from(15_000)),
            actual_cost: Some(Decimal::from(12_300)),
            created_at: start,
            updated_at: start,
            participant_ids: Vec::new(),
            vehicle_ids: Vec::new(),
        }
    }

    fn payload() -> serde_json::Value {
        json!({
            "name": "Carrera Montmeló",
            "event_type": "RACE",
            "start_date": "2024-05-10T08:00:00Z",
            "end_date": "2024-05-12T18:00:00Z",
            "coordinates": "41.57,2.26"
        })
    }

    #[test]
    fn test_create_event_request_valid_with_defaults() {
        let request: CreateEventRequest = serde_json::from_value(payload()).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.participant_ids.is_empty());
        assert!(request.vehicle_ids.is_empty());
        assert!(request.status.is_none());
        assert!(!request.touches_finances());
    }

    #[test]
    fn test_create_event_request_rejects_bad_coordinates() {
        let mut body = payload();
        body["coordinates"] = json!("95.0,2.26");
        let request: CreateEventRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("coordinates"));
    }

    #[test]
    fn test_create_event_request_rejects_long_notes() {
        let mut body = payload();
        body["notes"] = json!("n".repeat(2001));
        let request: CreateEventRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_touches_finances() {
        let update = UpdateEventRequest {
            actual_cost: Some(Decimal::from(100)),
            ..Default::default()
        };
        assert!(update.touches_finances());
        assert!(!UpdateEventRequest::default().touches_finances());
    }

    #[test]
    fn test_window_parsing_and_matching() {
        let filters: EventFilters = serde_json::from_value(json!({ "when": "upcoming" })).unwrap();
        assert_eq!(filters.when, Some(EventWindow::Upcoming));

        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let event = event_between(start, start + Duration::hours(5));
        let during = start + Duration::hours(1);

        assert!(EventWindow::Active.matches(&event, during));
        assert!(!EventWindow::Upcoming.matches(&event, during));
        assert!(EventWindow::Past.matches(&event, start + Duration::days(1)));
    }

    #[test]
    fn test_response_hides_costs_without_finance_access() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let event = event_between(start, start + Duration::minutes(330));

        let hidden = EventResponse::from_event(event.clone(), false, start);
        assert!(hidden.budget_allocated.is_none());
        assert!(hidden.actual_cost.is_none());
        assert_eq!(hidden.duration_hours, 5);

        let json = serde_json::to_value(&hidden).unwrap();
        assert!(json.get("budget_allocated").is_none());

        let visible = EventResponse::from_event(event, true, start);
        assert_eq!(visible.budget_allocated, Some(Decimal::from(15_000)));
        assert!(!visible.is_active);
        assert!(!visible.is_upcoming);
    }
}
