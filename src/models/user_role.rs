//! Roles de usuario del equipo
//!
//! Cada rol concede un subconjunto fijo de capacidades. Esta tabla es la
//! política de autorización que aplican los controladores.

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

/// Rol del usuario - mapea al ENUM user_role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Manager,
    Pilot,
    Mechanic,
    Engineer,
    Logistics,
    Finance,
    Media,
    Guest,
}

/// Capacidades que puede conceder un rol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ManageTeam,
    ManageFinances,
    ManageVehicles,
    ManageInventory,
    ManageEvents,
    ViewFinances,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ManageTeam,
        Capability::ManageFinances,
        Capability::ManageVehicles,
        Capability::ManageInventory,
        Capability::ManageEvents,
        Capability::ViewFinances,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Capability::ManageTeam => "gestionar el equipo",
            Capability::ManageFinances => "gestionar las finanzas",
            Capability::ManageVehicles => "gestionar los vehículos",
            Capability::ManageInventory => "gestionar el inventario",
            Capability::ManageEvents => "gestionar los eventos",
            Capability::ViewFinances => "ver las finanzas",
        }
    }
}

impl UserRole {
    pub const ALL: [UserRole; 8] = [
        UserRole::Manager,
        UserRole::Pilot,
        UserRole::Mechanic,
        UserRole::Engineer,
        UserRole::Logistics,
        UserRole::Finance,
        UserRole::Media,
        UserRole::Guest,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Manager => "MANAGER",
            UserRole::Pilot => "PILOT",
            UserRole::Mechanic => "MECHANIC",
            UserRole::Engineer => "ENGINEER",
            UserRole::Logistics => "LOGISTICS",
            UserRole::Finance => "FINANCE",
            UserRole::Media => "MEDIA",
            UserRole::Guest => "GUEST",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Manager => "Manager del Equipo",
            UserRole::Pilot => "Piloto",
            UserRole::Mechanic => "Mecánico",
            UserRole::Engineer => "Ingeniero",
            UserRole::Logistics => "Logística",
            UserRole::Finance => "Finanzas",
            UserRole::Media => "Medios",
            UserRole::Guest => "Invitado",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Manager => "Gestión completa del equipo",
            UserRole::Pilot => "Piloto del equipo",
            UserRole::Mechanic => "Mantenimiento y reparación de vehículos",
            UserRole::Engineer => "Análisis técnico y setup",
            UserRole::Logistics => "Gestión de viajes y transporte",
            UserRole::Finance => "Gestión financiera y sponsors",
            UserRole::Media => "Comunicación y redes sociales",
            UserRole::Guest => "Acceso limitado de solo lectura",
        }
    }

    pub fn can_manage_team(&self) -> bool {
        matches!(self, UserRole::Manager)
    }

    pub fn can_manage_finances(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Finance)
    }

    pub fn can_manage_vehicles(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Mechanic | UserRole::Engineer)
    }

    pub fn can_manage_inventory(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Mechanic | UserRole::Logistics)
    }

    pub fn can_manage_events(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Logistics)
    }

    pub fn can_view_finances(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Finance)
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, UserRole::Guest)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageTeam => self.can_manage_team(),
            Capability::ManageFinances => self.can_manage_finances(),
            Capability::ManageVehicles => self.can_manage_vehicles(),
            Capability::ManageInventory => self.can_manage_inventory(),
            Capability::ManageEvents => self.can_manage_events(),
            Capability::ViewFinances => self.can_view_finances(),
        }
    }

    /// Capacidades concedidas, en el orden de `Capability::ALL`
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|capability| self.has_capability(*capability))
            .collect()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Rol de usuario desconocido: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_role() {
        assert!(UserRole::Finance.can_manage_finances());
        assert!(UserRole::Finance.can_view_finances());
        assert!(!UserRole::Finance.can_manage_vehicles());
        assert!(!UserRole::Finance.can_manage_team());
    }

    #[test]
    fn test_only_guest_is_read_only() {
        for role in UserRole::ALL {
            assert_eq!(role.is_read_only(), role == UserRole::Guest, "{}", role);
        }
    }

    #[test]
    fn test_capability_table() {
        use Capability::*;

        let expected: [(UserRole, Vec<Capability>); 8] = [
            (
                UserRole::Manager,
                vec![ManageTeam, ManageFinances, ManageVehicles, ManageInventory, ManageEvents, ViewFinances],
            ),
            (UserRole::Pilot, vec![]),
            (UserRole::Mechanic, vec![ManageVehicles, ManageInventory]),
            (UserRole::Engineer, vec![ManageVehicles]),
            (UserRole::Logistics, vec![ManageInventory, ManageEvents]),
            (UserRole::Finance, vec![ManageFinances, ViewFinances]),
            (UserRole::Media, vec![]),
            (UserRole::Guest, vec![]),
        ];

        for (role, capabilities) in expected {
            assert_eq!(role.capabilities(), capabilities, "capacidades de {}", role);
        }
    }

    #[test]
    fn test_codes_match_serde() {
        for role in UserRole::ALL {
            assert_eq!(serde_json::to_value(role).unwrap(), role.code());
            assert_eq!(role.code().parse::<UserRole>(), Ok(role));
        }
    }
}
