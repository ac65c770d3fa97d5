//! Tipo de intervención de mantenimiento

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

/// Tipo de mantenimiento - mapea al ENUM maintenance_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "maintenance_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Inspection,
    Setup,
    Upgrade,
    Seasonal,
    PostEvent,
    PreEvent,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 8] = [
        MaintenanceType::Preventive,
        MaintenanceType::Corrective,
        MaintenanceType::Inspection,
        MaintenanceType::Setup,
        MaintenanceType::Upgrade,
        MaintenanceType::Seasonal,
        MaintenanceType::PostEvent,
        MaintenanceType::PreEvent,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "PREVENTIVE",
            MaintenanceType::Corrective => "CORRECTIVE",
            MaintenanceType::Inspection => "INSPECTION",
            MaintenanceType::Setup => "SETUP",
            MaintenanceType::Upgrade => "UPGRADE",
            MaintenanceType::Seasonal => "SEASONAL",
            MaintenanceType::PostEvent => "POST_EVENT",
            MaintenanceType::PreEvent => "PRE_EVENT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventivo",
            MaintenanceType::Corrective => "Correctivo",
            MaintenanceType::Inspection => "Inspección",
            MaintenanceType::Setup => "Setup",
            MaintenanceType::Upgrade => "Mejora",
            MaintenanceType::Seasonal => "Estacional",
            MaintenanceType::PostEvent => "Post-evento",
            MaintenanceType::PreEvent => "Pre-evento",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Mantenimiento programado regular",
            MaintenanceType::Corrective => "Reparación de fallo o avería",
            MaintenanceType::Inspection => "Revisión técnica o inspección",
            MaintenanceType::Setup => "Configuración y ajustes del vehículo",
            MaintenanceType::Upgrade => "Actualización o mejora de componentes",
            MaintenanceType::Seasonal => "Mantenimiento de temporada",
            MaintenanceType::PostEvent => "Revisión después de carrera o test",
            MaintenanceType::PreEvent => "Preparación antes de carrera o test",
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            MaintenanceType::Preventive | MaintenanceType::Inspection | MaintenanceType::Seasonal
        )
    }

    pub fn is_event_related(&self) -> bool {
        matches!(
            self,
            MaintenanceType::PostEvent | MaintenanceType::PreEvent | MaintenanceType::Setup
        )
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MaintenanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|maintenance_type| maintenance_type.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Tipo de mantenimiento desconocido: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scheduled() {
        let scheduled: Vec<_> = MaintenanceType::ALL
            .iter()
            .copied()
            .filter(MaintenanceType::is_scheduled)
            .collect();
        assert_eq!(
            scheduled,
            vec![
                MaintenanceType::Preventive,
                MaintenanceType::Inspection,
                MaintenanceType::Seasonal,
            ]
        );
    }

    #[test]
    fn test_is_event_related() {
        assert!(MaintenanceType::PostEvent.is_event_related());
        assert!(MaintenanceType::PreEvent.is_event_related());
        assert!(MaintenanceType::Setup.is_event_related());
        assert!(!MaintenanceType::Corrective.is_event_related());
        assert!(!MaintenanceType::Upgrade.is_event_related());
    }

    #[test]
    fn test_codes_match_serde() {
        for maintenance_type in MaintenanceType::ALL {
            assert_eq!(
                serde_json::to_value(maintenance_type).unwrap(),
                maintenance_type.code()
            );
        }
    }
}
