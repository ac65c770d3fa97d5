use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::user_dto::{TeamManagerRequest, UserResponse};
use crate::models::{Team, VehicleCategory};
use crate::utils::validation::validate_not_blank;

// Request para crear un equipo junto con su primer manager
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    pub primary_category: VehicleCategory,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[validate(length(max = 30))]
    pub contact_phone: Option<String>,

    #[validate(length(max = 255))]
    pub headquarters_location: Option<String>,

    #[validate]
    pub manager: TeamManagerRequest,
}

// Request para actualizar un equipo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    pub primary_category: Option<VehicleCategory>,

    #[validate(email)]
    pub contact_email: Option<String>,

    #[validate(length(max = 30))]
    pub contact_phone: Option<String>,

    #[validate(length(max = 255))]
    pub headquarters_location: Option<String>,

    pub active: Option<bool>,
}

// Response de equipo
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub primary_category: VehicleCategory,
    pub primary_category_name: &'static str,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub headquarters_location: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            primary_category_name: team.primary_category.display_name(),
            id: team.id,
            name: team.name,
            description: team.description,
            logo_url: team.logo_url,
            primary_category: team.primary_category,
            contact_email: team.contact_email,
            contact_phone: team.contact_phone,
            headquarters_location: team.headquarters_location,
            active: team.active,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

// Response del alta de equipo
#[derive(Debug, Serialize)]
pub struct TeamCreatedResponse {
    pub team: TeamResponse,
    pub manager: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Racing Team Demo",
            "description": "Equipo de resistencia",
            "logo_url": "https://racing.example.com/logo.png",
            "primary_category": "CAR",
            "contact_email": "info@racing.example.com",
            "manager": {
                "email": "admin@racing.com",
                "first_name": "Admin",
                "last_name": "Racing"
            }
        })
    }

    #[test]
    fn test_create_team_request_valid() {
        let request: CreateTeamRequest = serde_json::from_value(payload()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.primary_category, VehicleCategory::Car);
    }

    #[test]
    fn test_create_team_request_name_too_long() {
        let mut body = payload();
        body["name"] = json!("x".repeat(101));
        let request: CreateTeamRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_team_request_validates_manager() {
        let mut body = payload();
        body["manager"]["email"] = json!("invalido");
        let request: CreateTeamRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("manager"));
    }

    #[test]
    fn test_primary_category_required() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("primary_category");
        assert!(serde_json::from_value::<CreateTeamRequest>(body).is_err());
    }

    #[test]
    fn test_description_limit() {
        let request = UpdateTeamRequest {
            description: Some("d".repeat(501)),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
