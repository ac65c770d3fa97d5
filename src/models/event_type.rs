//! Tipo de evento del calendario del equipo

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

/// Tipo de evento - mapea al ENUM event_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "event_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Race,
    Test,
    Practice,
    Qualifying,
    Training,
    Travel,
    Meeting,
    Maintenance,
    Presentation,
    Media,
    SponsorEvent,
    Shakedown,
    Trackday,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 14] = [
        EventType::Race,
        EventType::Test,
        EventType::Practice,
        EventType::Qualifying,
        EventType::Training,
        EventType::Travel,
        EventType::Meeting,
        EventType::Maintenance,
        EventType::Presentation,
        EventType::Media,
        EventType::SponsorEvent,
        EventType::Shakedown,
        EventType::Trackday,
        EventType::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EventType::Race => "RACE",
            EventType::Test => "TEST",
            EventType::Practice => "PRACTICE",
            EventType::Qualifying => "QUALIFYING",
            EventType::Training => "TRAINING",
            EventType::Travel => "TRAVEL",
            EventType::Meeting => "MEETING",
            EventType::Maintenance => "MAINTENANCE",
            EventType::Presentation => "PRESENTATION",
            EventType::Media => "MEDIA",
            EventType::SponsorEvent => "SPONSOR_EVENT",
            EventType::Shakedown => "SHAKEDOWN",
            EventType::Trackday => "TRACKDAY",
            EventType::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Race => "Carrera",
            EventType::Test => "Test",
            EventType::Practice => "Entrenamientos",
            EventType::Qualifying => "Clasificación",
            EventType::Training => "Formación",
            EventType::Travel => "Viaje",
            EventType::Meeting => "Reunión",
            EventType::Maintenance => "Mantenimiento",
            EventType::Presentation => "Presentación",
            EventType::Media => "Medios",
            EventType::SponsorEvent => "Evento Sponsor",
            EventType::Shakedown => "Shakedown",
            EventType::Trackday => "Trackday",
            EventType::Other => "Otro",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EventType::Race => "Evento de competición oficial",
            EventType::Test => "Sesión de pruebas y desarrollo",
            EventType::Practice => "Sesión de entrenamientos",
            EventType::Qualifying => "Sesión de clasificación",
            EventType::Training => "Entrenamiento del equipo",
            EventType::Travel => "Desplazamiento del equipo",
            EventType::Meeting => "Reunión del equipo o con sponsors",
            EventType::Maintenance => "Sesión de mantenimiento programado",
            EventType::Presentation => "Presentación del equipo o vehículo",
            EventType::Media => "Evento mediático o promocional",
            EventType::SponsorEvent => "Evento relacionado con sponsors",
            EventType::Shakedown => "Primera prueba de vehículo nuevo o modificado",
            EventType::Trackday => "Día de pista abierto",
            EventType::Other => "Otro tipo de evento",
        }
    }

    pub fn is_competitive(&self) -> bool {
        matches!(self, EventType::Race | EventType::Qualifying)
    }

    pub fn is_on_track(&self) -> bool {
        matches!(
            self,
            EventType::Race
                | EventType::Test
                | EventType::Practice
                | EventType::Qualifying
                | EventType::Shakedown
                | EventType::Trackday
        )
    }

    pub fn requires_vehicle(&self) -> bool {
        self.is_on_track() || matches!(self, EventType::Maintenance)
    }

    pub fn is_public(&self) -> bool {
        matches!(
            self,
            EventType::Race | EventType::Presentation | EventType::Media | EventType::SponsorEvent
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|event_type| event_type.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Tipo de evento desconocido: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(predicate: fn(&EventType) -> bool) -> Vec<EventType> {
        EventType::ALL.iter().copied().filter(predicate).collect()
    }

    #[test]
    fn test_is_competitive() {
        assert_eq!(members(EventType::is_competitive), vec![EventType::Race, EventType::Qualifying]);
    }

    #[test]
    fn test_is_on_track() {
        assert_eq!(
            members(EventType::is_on_track),
            vec![
                EventType::Race,
                EventType::Test,
                EventType::Practice,
                EventType::Qualifying,
                EventType::Shakedown,
                EventType::Trackday,
            ]
        );
    }

    #[test]
    fn test_requires_vehicle_adds_maintenance() {
        let mut expected = members(EventType::is_on_track);
        expected.push(EventType::Maintenance);
        expected.sort_by_key(|t| EventType::ALL.iter().position(|a| a == t));
        assert_eq!(members(EventType::requires_vehicle), expected);
        assert!(!EventType::Travel.requires_vehicle());
    }

    #[test]
    fn test_is_public() {
        assert_eq!(
            members(EventType::is_public),
            vec![
                EventType::Race,
                EventType::Presentation,
                EventType::Media,
                EventType::SponsorEvent,
            ]
        );
    }

    #[test]
    fn test_codes_match_serde() {
        for event_type in EventType::ALL {
            assert_eq!(serde_json::to_value(event_type).unwrap(), event_type.code());
        }
    }
}
