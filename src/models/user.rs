//! Modelo de User
//!
//! Miembro de un equipo con un rol. No guarda credenciales: la identidad
//! llega ya resuelta por el gateway.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::user_role::{Capability, UserRole};

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub team_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.active && self.role.has_capability(capability)
    }

    /// Licencia caducada en la fecha indicada; sin fecha no caduca
    pub fn license_expired_on(&self, date: NaiveDate) -> bool {
        self.license_expiry.map_or(false, |expiry| expiry < date)
    }
}
