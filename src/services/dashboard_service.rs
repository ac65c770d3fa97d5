//! Resumen del equipo
//!
//! Los contadores se calculan con los predicados del dominio sobre las
//! entidades ya cargadas, sin consultas agregadas en SQL.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::dto::event_dto::EventResponse;
use crate::models::{Event, User, Vehicle};

pub const NEXT_EVENTS_LIMIT: usize = 5;

pub struct DashboardService;

impl DashboardService {
    pub fn summarize(
        team_id: Uuid,
        vehicles: &[Vehicle],
        users: &[User],
        events: Vec<Event>,
        can_view_finances: bool,
        now: DateTime<Utc>,
    ) -> DashboardResponse {
        let total_events = events.len();

        let mut upcoming: Vec<Event> = events
            .into_iter()
            .filter(|event| event.is_upcoming_at(now))
            .collect();
        upcoming.sort_by_key(|event| event.start_date);
        let upcoming_events = upcoming.len();

        let next_events = upcoming
            .into_iter()
            .take(NEXT_EVENTS_LIMIT)
            .map(|event| EventResponse::from_event(event, can_view_finances, now))
            .collect();

        DashboardResponse {
            team_id,
            total_vehicles: vehicles.len(),
            active_vehicles: vehicles.iter().filter(|vehicle| vehicle.active).count(),
            vehicles_needing_maintenance: vehicles
                .iter()
                .filter(|vehicle| vehicle.needs_maintenance())
                .count(),
            total_users: users.len(),
            total_events,
            upcoming_events,
            next_events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::event_dto::tests::event_between;
    use crate::models::vehicle::tests::vehicle;
    use crate::models::VehicleType;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    #[test]
    fn test_counts_and_next_events() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let team_id = Uuid::new_v4();

        let mut due = vehicle(VehicleType::Superbike);
        due.total_kilometers = Decimal::from(5_000);
        due.next_maintenance_km = Some(Decimal::from(4_000));
        let mut retired = vehicle(VehicleType::Gt4);
        retired.active = false;
        let vehicles = vec![due, retired, vehicle(VehicleType::Moto3)];

        let mut events = vec![
            event_between(now - Duration::days(10), now - Duration::days(9)),
            event_between(now - Duration::hours(1), now + Duration::hours(1)),
        ];
        for day in (1..=7).rev() {
            events.push(event_between(now + Duration::days(day), now + Duration::days(day) + Duration::hours(8)));
        }

        let dashboard = DashboardService::summarize(team_id, &vehicles, &[], events, false, now);

        assert_eq!(dashboard.team_id, team_id);
        assert_eq!(dashboard.total_vehicles, 3);
        assert_eq!(dashboard.active_vehicles, 2);
        assert_eq!(dashboard.vehicles_needing_maintenance, 1);
        assert_eq!(dashboard.total_users, 0);
        assert_eq!(dashboard.total_events, 9);
        assert_eq!(dashboard.upcoming_events, 7);
        assert_eq!(dashboard.next_events.len(), NEXT_EVENTS_LIMIT);
        assert_eq!(dashboard.next_events[0].start_date, now + Duration::days(1));
        assert!(dashboard.next_events.iter().all(|event| event.budget_allocated.is_none()));
    }
}
