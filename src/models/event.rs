//! Modelo de Event
//!
//! Evento del calendario del equipo con ventana temporal, estado y las
//! asociaciones muchos-a-muchos con participantes y vehículos.
//! Las asociaciones se guardan como ids en el propio evento y se
//! persisten en las tablas event_participants y event_vehicles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::event_status::EventStatus;
use super::event_type::EventType;

/// Event - mapea a la tabla events más sus tablas de unión
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub circuit_name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<String>,
    pub status: EventStatus,
    pub external_calendar_id: Option<String>,
    pub weather_conditions: Option<String>,
    pub notes: Option<String>,
    pub budget_allocated: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[sqlx(skip)]
    #[serde(default)]
    pub participant_ids: Vec<Uuid>,

    #[sqlx(skip)]
    #[serde(default)]
    pub vehicle_ids: Vec<Uuid>,
}

impl Event {
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    pub fn is_upcoming(&self) -> bool {
        self.is_upcoming_at(Utc::now())
    }

    pub fn is_past(&self) -> bool {
        self.is_past_at(Utc::now())
    }

    // Desigualdades estrictas: los instantes de inicio y fin no cumplen ninguna
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now > self.start_date && now < self.end_date
    }

    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        now < self.start_date
    }

    pub fn is_past_at(&self, now: DateTime<Utc>) -> bool {
        now > self.end_date
    }

    /// Horas completas entre inicio y fin, truncadas hacia cero.
    /// Negativo si el fin es anterior al inicio.
    pub fn duration_in_hours(&self) -> i64 {
        (self.end_date - self.start_date).num_hours()
    }

    /// Devuelve true si el participante no estaba y se añadió
    pub fn add_participant(&mut self, user_id: Uuid) -> bool {
        add_unique(&mut self.participant_ids, user_id)
    }

    pub fn remove_participant(&mut self, user_id: Uuid) -> bool {
        remove_existing(&mut self.participant_ids, user_id)
    }

    pub fn add_vehicle(&mut self, vehicle_id: Uuid) -> bool {
        add_unique(&mut self.vehicle_ids, vehicle_id)
    }

    pub fn remove_vehicle(&mut self, vehicle_id: Uuid) -> bool {
        remove_existing(&mut self.vehicle_ids, vehicle_id)
    }
}

fn add_unique(ids: &mut Vec<Uuid>, id: Uuid) -> bool {
    if ids.contains(&id) {
        return false;
    }
    ids.push(id);
    true
}

fn remove_existing(ids: &mut Vec<Uuid>, id: Uuid) -> bool {
    match ids.iter().position(|existing| *existing == id) {
        Some(index) => {
            ids.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            name: "GP de Jerez".to_string(),
            description: None,
            event_type: EventType::Race,
            start_date: start,
            end_date: end,
            location: Some("Jerez de la Frontera".to_string()),
            circuit_name: Some("Circuito de Jerez".to_string()),
            address: None,
            coordinates: None,
            status: EventStatus::Planned,
            external_calendar_id: None,
            weather_conditions: None,
            notes: None,
            budget_allocated: None,
            actual_cost: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            participant_ids: Vec::new(),
            vehicle_ids: Vec::new(),
        }
    }

    fn window() -> Event {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 5, 30, 0).unwrap();
        event(start, end)
    }

    #[test]
    fn test_duration_truncates() {
        assert_eq!(window().duration_in_hours(), 5);
    }

    #[test]
    fn test_duration_negative_when_reversed() {
        let e = window();
        let reversed = event(e.end_date, e.start_date);
        assert_eq!(reversed.duration_in_hours(), -5);
    }

    #[test]
    fn test_exactly_one_phase_inside_window() {
        let e = window();
        let instants = [
            e.start_date - Duration::minutes(1),
            e.start_date + Duration::minutes(1),
            e.end_date - Duration::seconds(1),
            e.end_date + Duration::hours(3),
        ];
        for now in instants {
            let phases = [e.is_upcoming_at(now), e.is_active_at(now), e.is_past_at(now)];
            assert_eq!(phases.iter().filter(|p| **p).count(), 1, "instante {}", now);
        }
    }

    #[test]
    fn test_boundaries_satisfy_no_phase() {
        let e = window();
        for now in [e.start_date, e.end_date] {
            assert!(!e.is_upcoming_at(now));
            assert!(!e.is_active_at(now));
            assert!(!e.is_past_at(now));
        }
    }

    #[test]
    fn test_now_based_predicates() {
        let now = Utc::now();
        let upcoming = event(now + Duration::days(2), now + Duration::days(3));
        assert!(upcoming.is_upcoming());
        let running = event(now - Duration::hours(1), now + Duration::hours(1));
        assert!(running.is_active());
        let finished = event(now - Duration::days(3), now - Duration::days(2));
        assert!(finished.is_past());
    }

    #[test]
    fn test_participants_are_idempotent() {
        let mut e = window();
        let pilot = Uuid::new_v4();
        let mechanic = Uuid::new_v4();

        assert!(e.add_participant(pilot));
        assert!(e.add_participant(mechanic));
        assert!(!e.add_participant(pilot));
        assert_eq!(e.participant_ids, vec![pilot, mechanic]);

        assert!(!e.remove_participant(Uuid::new_v4()));
        assert_eq!(e.participant_ids, vec![pilot, mechanic]);

        assert!(e.remove_participant(pilot));
        assert_eq!(e.participant_ids, vec![mechanic]);
    }

    #[test]
    fn test_vehicles_are_idempotent() {
        let mut e = window();
        let car = Uuid::new_v4();
        assert!(e.add_vehicle(car));
        assert!(!e.add_vehicle(car));
        assert_eq!(e.vehicle_ids.len(), 1);
        assert!(e.remove_vehicle(car));
        assert!(!e.remove_vehicle(car));
        assert!(e.vehicle_ids.is_empty());
    }
}
