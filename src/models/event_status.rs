//! Ciclo de vida de un evento

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

/// Estado del evento - mapea al ENUM event_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "event_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    Planned,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
    WeatherDelay,
    TechnicalIssue,
}

impl EventStatus {
    pub const ALL: [EventStatus; 8] = [
        EventStatus::Planned,
        EventStatus::Confirmed,
        EventStatus::InProgress,
        EventStatus::Completed,
        EventStatus::Cancelled,
        EventStatus::Postponed,
        EventStatus::WeatherDelay,
        EventStatus::TechnicalIssue,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EventStatus::Planned => "PLANNED",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::InProgress => "IN_PROGRESS",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Cancelled => "CANCELLED",
            EventStatus::Postponed => "POSTPONED",
            EventStatus::WeatherDelay => "WEATHER_DELAY",
            EventStatus::TechnicalIssue => "TECHNICAL_ISSUE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Planificado",
            EventStatus::Confirmed => "Confirmado",
            EventStatus::InProgress => "En curso",
            EventStatus::Completed => "Completado",
            EventStatus::Cancelled => "Cancelado",
            EventStatus::Postponed => "Pospuesto",
            EventStatus::WeatherDelay => "Retraso por clima",
            EventStatus::TechnicalIssue => "Problema técnico",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Evento planificado pero no confirmado",
            EventStatus::Confirmed => "Evento confirmado y programado",
            EventStatus::InProgress => "Evento actualmente en desarrollo",
            EventStatus::Completed => "Evento finalizado exitosamente",
            EventStatus::Cancelled => "Evento cancelado",
            EventStatus::Postponed => "Evento pospuesto a nueva fecha",
            EventStatus::WeatherDelay => "Evento retrasado por condiciones climáticas",
            EventStatus::TechnicalIssue => "Evento afectado por problemas técnicos",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EventStatus::Confirmed | EventStatus::InProgress)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Cancelled)
    }

    pub fn can_be_modified(&self) -> bool {
        matches!(
            self,
            EventStatus::Planned | EventStatus::Confirmed | EventStatus::Postponed
        )
    }

    pub fn requires_attention(&self) -> bool {
        matches!(
            self,
            EventStatus::WeatherDelay | EventStatus::TechnicalIssue | EventStatus::Postponed
        )
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Estado de evento desconocido: '{}'", s))
    }
}
