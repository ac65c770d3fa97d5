//! Categoría de vehículo
//!
//! Agrupación principal de los vehículos del equipo (coches o motos).
//! Mapea al ENUM vehicle_category de PostgreSQL.

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 2] = [VehicleCategory::Car, VehicleCategory::Motorcycle];

    pub fn code(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "CAR",
            VehicleCategory::Motorcycle => "MOTORCYCLE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Coches",
            VehicleCategory::Motorcycle => "Motos",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Categoría de vehículo desconocida: '{}'", s))
    }
}
