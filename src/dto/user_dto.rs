use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Capability, User, UserRole};
use crate::utils::validation::validate_not_blank;

// Request para crear un miembro del equipo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub last_name: String,

    pub role: UserRole,

    #[validate(length(max = 30))]
    pub phone_number: Option<String>,

    #[validate(length(max = 50))]
    pub license_number: Option<String>,

    pub license_expiry: Option<NaiveDate>,
}

// Primer manager del equipo, creado junto con el equipo
#[derive(Debug, Deserialize, Validate)]
pub struct TeamManagerRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub last_name: String,

    #[validate(length(max = 30))]
    pub phone_number: Option<String>,
}

impl From<TeamManagerRequest> for CreateUserRequest {
    fn from(manager: TeamManagerRequest) -> Self {
        Self {
            email: manager.email,
            first_name: manager.first_name,
            last_name: manager.last_name,
            role: UserRole::Manager,
            phone_number: manager.phone_number,
            license_number: None,
            license_expiry: None,
        }
    }
}

// Request para actualizar un miembro
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub last_name: Option<String>,

    pub role: Option<UserRole>,

    #[validate(length(max = 30))]
    pub phone_number: Option<String>,

    #[validate(length(max = 50))]
    pub license_number: Option<String>,

    pub license_expiry: Option<NaiveDate>,

    pub active: Option<bool>,
}

// Response de usuario
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub role: UserRole,
    pub role_name: &'static str,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub license_expired: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// `today` decide si la licencia ya caducó
    pub fn from_user(user: User, today: NaiveDate) -> Self {
        Self {
            license_expired: user.license_expired_on(today),
            full_name: user.full_name(),
            role_name: user.role.display_name(),
            id: user.id,
            team_id: user.team_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            phone_number: user.phone_number,
            license_number: user.license_number,
            license_expiry: user.license_expiry,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from_user(user, Utc::now().date_naive())
    }
}

// Permisos efectivos de un usuario según su rol
#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub user_id: Uuid,
    pub role: UserRole,
    pub role_name: &'static str,
    pub role_description: &'static str,
    pub capabilities: Vec<Capability>,
    pub read_only: bool,
}

impl From<&User> for PermissionsResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            role_name: user.role.display_name(),
            role_description: user.role.description(),
            capabilities: if user.active { user.role.capabilities() } else { Vec::new() },
            read_only: user.role.is_read_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_request_valid() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "email": "mecanico@racing.com",
            "first_name": "Luis",
            "last_name": "Pérez",
            "role": "MECHANIC",
            "license_expiry": "2026-06-30"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.role, UserRole::Mechanic);
    }

    #[test]
    fn test_create_user_request_rejects_bad_email_and_blank_name() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "email": "no-es-un-email",
            "first_name": "   ",
            "last_name": "Pérez",
            "role": "PILOT"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("first_name"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<CreateUserRequest, _> = serde_json::from_value(json!({
            "email": "a@racing.com",
            "first_name": "A",
            "last_name": "B",
            "role": "DRIVER"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_manager_request_becomes_manager() {
        let manager = TeamManagerRequest {
            email: "admin@racing.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Racing".to_string(),
            phone_number: None,
        };
        let user: CreateUserRequest = manager.into();
        assert_eq!(user.role, UserRole::Manager);
    }

    #[test]
    fn test_response_flags_expired_license() {
        let user = User {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            email: "piloto@racing.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            role: UserRole::Pilot,
            phone_number: None,
            license_number: Some("RT001".to_string()),
            license_expiry: NaiveDate::from_ymd_opt(2025, 12, 31),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let valid = UserResponse::from_user(user.clone(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert!(!valid.license_expired);
        assert_eq!(valid.full_name, "Ana García");

        let expired = UserResponse::from_user(user, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(expired.license_expired);
    }
}
