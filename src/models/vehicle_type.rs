//! Tipo de vehículo
//!
//! Disciplina de competición del vehículo. Cada tipo pertenece a una
//! categoría fija (tabla estática tipo → categoría).

use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;

use super::vehicle_category::VehicleCategory;

/// Tipo de vehículo - mapea al ENUM vehicle_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    // Coches - Fórmula
    #[serde(rename = "FORMULA_1")]
    #[sqlx(rename = "FORMULA_1")]
    Formula1,
    #[serde(rename = "FORMULA_2")]
    #[sqlx(rename = "FORMULA_2")]
    Formula2,
    #[serde(rename = "FORMULA_3")]
    #[sqlx(rename = "FORMULA_3")]
    Formula3,
    #[serde(rename = "FORMULA_4")]
    #[sqlx(rename = "FORMULA_4")]
    Formula4,
    FormulaFord,

    // Coches - GT/Resistencia
    Gt3,
    Gt4,
    Lmp,
    Prototype,

    // Coches - Turismos
    Tcr,
    Wtcc,
    Supercars,

    // Coches - Rally
    Wrc,
    R5,
    HistoricRally,

    // Coches - Monoplazas
    Indycar,
    FormulaE,

    // Coches - Drift/Autocross
    DriftPro,
    TimeAttack,

    // Motos - Circuito
    Motogp,
    Moto2,
    Moto3,
    Superbike,
    Supersport,

    // Motos - Endurance
    Ewc,
    BolDor,
    #[serde(rename = "ENDURANCE_24H")]
    #[sqlx(rename = "ENDURANCE_24H")]
    Endurance24h,

    // Motos - Motocross
    Mxgp,
    Mx2,
    Emx,

    // Motos - Enduro
    Endurogp,
    Isde,

    // Motos - Trial
    Trialgp,
    Trial2,

    // Motos - Velocidad
    Naked,
    Sport,
    Classic,
}

impl VehicleType {
    /// Todos los tipos en orden de declaración
    pub const ALL: [VehicleType; 37] = [
        VehicleType::Formula1,
        VehicleType::Formula2,
        VehicleType::Formula3,
        VehicleType::Formula4,
        VehicleType::FormulaFord,
        VehicleType::Gt3,
        VehicleType::Gt4,
        VehicleType::Lmp,
        VehicleType::Prototype,
        VehicleType::Tcr,
        VehicleType::Wtcc,
        VehicleType::Supercars,
        VehicleType::Wrc,
        VehicleType::R5,
        VehicleType::HistoricRally,
        VehicleType::Indycar,
        VehicleType::FormulaE,
        VehicleType::DriftPro,
        VehicleType::TimeAttack,
        VehicleType::Motogp,
        VehicleType::Moto2,
        VehicleType::Moto3,
        VehicleType::Superbike,
        VehicleType::Supersport,
        VehicleType::Ewc,
        VehicleType::BolDor,
        VehicleType::Endurance24h,
        VehicleType::Mxgp,
        VehicleType::Mx2,
        VehicleType::Emx,
        VehicleType::Endurogp,
        VehicleType::Isde,
        VehicleType::Trialgp,
        VehicleType::Trial2,
        VehicleType::Naked,
        VehicleType::Sport,
        VehicleType::Classic,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Formula1 => "FORMULA_1",
            VehicleType::Formula2 => "FORMULA_2",
            VehicleType::Formula3 => "FORMULA_3",
            VehicleType::Formula4 => "FORMULA_4",
            VehicleType::FormulaFord => "FORMULA_FORD",
            VehicleType::Gt3 => "GT3",
            VehicleType::Gt4 => "GT4",
            VehicleType::Lmp => "LMP",
            VehicleType::Prototype => "PROTOTYPE",
            VehicleType::Tcr => "TCR",
            VehicleType::Wtcc => "WTCC",
            VehicleType::Supercars => "SUPERCARS",
            VehicleType::Wrc => "WRC",
            VehicleType::R5 => "R5",
            VehicleType::HistoricRally => "HISTORIC_RALLY",
            VehicleType::Indycar => "INDYCAR",
            VehicleType::FormulaE => "FORMULA_E",
            VehicleType::DriftPro => "DRIFT_PRO",
            VehicleType::TimeAttack => "TIME_ATTACK",
            VehicleType::Motogp => "MOTOGP",
            VehicleType::Moto2 => "MOTO2",
            VehicleType::Moto3 => "MOTO3",
            VehicleType::Superbike => "SUPERBIKE",
            VehicleType::Supersport => "SUPERSPORT",
            VehicleType::Ewc => "EWC",
            VehicleType::BolDor => "BOL_DOR",
            VehicleType::Endurance24h => "ENDURANCE_24H",
            VehicleType::Mxgp => "MXGP",
            VehicleType::Mx2 => "MX2",
            VehicleType::Emx => "EMX",
            VehicleType::Endurogp => "ENDUROGP",
            VehicleType::Isde => "ISDE",
            VehicleType::Trialgp => "TRIALGP",
            VehicleType::Trial2 => "TRIAL2",
            VehicleType::Naked => "NAKED",
            VehicleType::Sport => "SPORT",
            VehicleType::Classic => "CLASSIC",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleType::Formula1 => "Fórmula 1",
            VehicleType::Formula2 => "Fórmula 2",
            VehicleType::Formula3 => "Fórmula 3",
            VehicleType::Formula4 => "Fórmula 4",
            VehicleType::FormulaFord => "Formula Ford",
            VehicleType::Gt3 => "GT3",
            VehicleType::Gt4 => "GT4",
            VehicleType::Lmp => "LMP",
            VehicleType::Prototype => "Prototype",
            VehicleType::Tcr => "TCR",
            VehicleType::Wtcc => "WTCC",
            VehicleType::Supercars => "Supercars",
            VehicleType::Wrc => "WRC",
            VehicleType::R5 => "R5",
            VehicleType::HistoricRally => "Historic Rally",
            VehicleType::Indycar => "IndyCar",
            VehicleType::FormulaE => "Formula E",
            VehicleType::DriftPro => "Drift Pro",
            VehicleType::TimeAttack => "Time Attack",
            VehicleType::Motogp => "MotoGP",
            VehicleType::Moto2 => "Moto2",
            VehicleType::Moto3 => "Moto3",
            VehicleType::Superbike => "Superbike",
            VehicleType::Supersport => "Supersport",
            VehicleType::Ewc => "EWC",
            VehicleType::BolDor => "Bol d'Or",
            VehicleType::Endurance24h => "24h Endurance",
            VehicleType::Mxgp => "MXGP",
            VehicleType::Mx2 => "MX2",
            VehicleType::Emx => "EMX",
            VehicleType::Endurogp => "EnduroGP",
            VehicleType::Isde => "ISDE",
            VehicleType::Trialgp => "TrialGP",
            VehicleType::Trial2 => "Trial2",
            VehicleType::Naked => "Naked",
            VehicleType::Sport => "Sport",
            VehicleType::Classic => "Classic",
        }
    }

    /// Categoría a la que pertenece el tipo
    pub fn category(&self) -> VehicleCategory {
        match self {
            VehicleType::Formula1
            | VehicleType::Formula2
            | VehicleType::Formula3
            | VehicleType::Formula4
            | VehicleType::FormulaFord
            | VehicleType::Gt3
            | VehicleType::Gt4
            | VehicleType::Lmp
            | VehicleType::Prototype
            | VehicleType::Tcr
            | VehicleType::Wtcc
            | VehicleType::Supercars
            | VehicleType::Wrc
            | VehicleType::R5
            | VehicleType::HistoricRally
            | VehicleType::Indycar
            | VehicleType::FormulaE
            | VehicleType::DriftPro
            | VehicleType::TimeAttack => VehicleCategory::Car,

            VehicleType::Motogp
            | VehicleType::Moto2
            | VehicleType::Moto3
            | VehicleType::Superbike
            | VehicleType::Supersport
            | VehicleType::Ewc
            | VehicleType::BolDor
            | VehicleType::Endurance24h
            | VehicleType::Mxgp
            | VehicleType::Mx2
            | VehicleType::Emx
            | VehicleType::Endurogp
            | VehicleType::Isde
            | VehicleType::Trialgp
            | VehicleType::Trial2
            | VehicleType::Naked
            | VehicleType::Sport
            | VehicleType::Classic => VehicleCategory::Motorcycle,
        }
    }

    /// Todos los tipos de una categoría, en orden de declaración
    pub fn by_category(category: VehicleCategory) -> Vec<VehicleType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|vehicle_type| vehicle_type.category() == category)
            .collect()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|vehicle_type| vehicle_type.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Tipo de vehículo desconocido: '{}'", s))
    }
}
