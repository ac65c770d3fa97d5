//! Middleware de identificación del usuario
//!
//! El usuario que hace la petición llega en la cabecera `X-User-Id`.
//! Se comprueba que exista y esté activo, y se inyecta en las extensions
//! como `AuthenticatedUser` para los handlers.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    models::{Capability, User, UserRole},
    repositories::user_repository::UserRepository,
    state::AppState,
    utils::errors::AppError,
};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.has_capability(capability)
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            team_id: user.team_id,
            role: user.role,
        }
    }
}

/// Lee el id de la cabecera sin tocar la base de datos
pub fn user_id_from_headers(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let value = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::Unauthorized("Cabecera X-User-Id requerida".to_string()))?;

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .ok_or_else(|| AppError::Unauthorized("X-User-Id no es un UUID válido".to_string()))
}

/// Middleware de identificación
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = user_id_from_headers(request.headers())?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    if !user.active {
        return Err(AppError::Unauthorized("Usuario inactivo".to_string()));
    }

    debug!("👤 Petición de {} ({})", user.full_name(), user.role);
    request.extensions_mut().insert(AuthenticatedUser::from(&user));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            user_id_from_headers(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_malformed_header_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("piloto-1"));
        assert!(matches!(
            user_id_from_headers(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_valid_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(user_id_from_headers(&headers).unwrap(), id);
    }

    #[test]
    fn test_capabilities_follow_role() {
        let mechanic = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            role: UserRole::Mechanic,
        };
        assert!(mechanic.can(Capability::ManageVehicles));
        assert!(!mechanic.can(Capability::ManageEvents));
    }
}
