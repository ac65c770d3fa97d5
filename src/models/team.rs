//! Modelo de Team
//!
//! El equipo es el tenant principal: agrupa miembros, vehículos y eventos.
//! Mapea exactamente a la tabla teams; el borrado se propaga en cascada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::vehicle_category::VehicleCategory;

/// Team principal - mapea exactamente a la tabla teams
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub primary_category: VehicleCategory,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub headquarters_location: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
