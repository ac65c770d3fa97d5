//! Estado operativo del vehículo

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Repair,
    OutOfService,
    Transport,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 6] = [
        VehicleStatus::Available,
        VehicleStatus::InUse,
        VehicleStatus::Maintenance,
        VehicleStatus::Repair,
        VehicleStatus::OutOfService,
        VehicleStatus::Transport,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::InUse => "IN_USE",
            VehicleStatus::Maintenance => "MAINTENANCE",
            VehicleStatus::Repair => "REPAIR",
            VehicleStatus::OutOfService => "OUT_OF_SERVICE",
            VehicleStatus::Transport => "TRANSPORT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Disponible",
            VehicleStatus::InUse => "En uso",
            VehicleStatus::Maintenance => "En mantenimiento",
            VehicleStatus::Repair => "En reparación",
            VehicleStatus::OutOfService => "Fuera de servicio",
            VehicleStatus::Transport => "En transporte",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "El vehículo está listo para usar",
            VehicleStatus::InUse => "El vehículo está siendo utilizado",
            VehicleStatus::Maintenance => "El vehículo está en mantenimiento",
            VehicleStatus::Repair => "El vehículo necesita reparación",
            VehicleStatus::OutOfService => "El vehículo no está operativo",
            VehicleStatus::Transport => "El vehículo está siendo transportado",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, VehicleStatus::Available)
    }

    pub fn needs_attention(&self) -> bool {
        matches!(
            self,
            VehicleStatus::Maintenance | VehicleStatus::Repair | VehicleStatus::OutOfService
        )
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Estado de vehículo desconocido: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_available() {
        let available: Vec<_> = VehicleStatus::ALL.iter().filter(|s| s.is_available()).collect();
        assert_eq!(available, vec![&VehicleStatus::Available]);
    }

    #[test]
    fn test_needs_attention() {
        assert!(VehicleStatus::Maintenance.needs_attention());
        assert!(VehicleStatus::Repair.needs_attention());
        assert!(VehicleStatus::OutOfService.needs_attention());
        assert!(!VehicleStatus::Available.needs_attention());
        assert!(!VehicleStatus::InUse.needs_attention());
        assert!(!VehicleStatus::Transport.needs_attention());
    }

    #[test]
    fn test_default_is_available() {
        assert_eq!(VehicleStatus::default(), VehicleStatus::Available);
    }

    #[test]
    fn test_codes_match_serde() {
        for status in VehicleStatus::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), status.code());
            assert_eq!(status.code().parse::<VehicleStatus>(), Ok(status));
        }
    }
}
