//! Requests y responses de la API
//!
//! Las requests llevan las reglas de validación declarativas; las
//! responses añaden los campos derivados (nombres visibles, predicados).

pub mod dashboard_dto;
pub mod event_dto;
pub mod maintenance_dto;
pub mod reference_dto;
pub mod team_dto;
pub mod user_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
