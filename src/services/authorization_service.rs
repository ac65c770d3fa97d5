use uuid::Uuid;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::Capability;
use crate::utils::errors::{forbidden_error, AppError};

/// Comprobaciones de acceso que aplican los controladores
pub struct AuthorizationService;

impl AuthorizationService {
    /// Sólo se accede a recursos del propio equipo
    pub fn ensure_same_team(user: &AuthenticatedUser, team_id: Uuid) -> Result<(), AppError> {
        if user.team_id != team_id {
            return Err(forbidden_error(
                "acceder a este recurso",
                "pertenece a otro equipo",
            ));
        }
        Ok(())
    }

    pub fn ensure_capability(user: &AuthenticatedUser, capability: Capability) -> Result<(), AppError> {
        if !user.can(capability) {
            return Err(forbidden_error(
                capability.description(),
                &format!("el rol {} no lo permite", user.role.display_name()),
            ));
        }
        Ok(())
    }

    /// Mismo equipo y la capacidad indicada
    pub fn ensure_team_capability(
        user: &AuthenticatedUser,
        team_id: Uuid,
        capability: Capability,
    ) -> Result<(), AppError> {
        Self::ensure_same_team(user, team_id)?;
        Self::ensure_capability(user, capability)
    }

    pub fn can_view_finances(user: &AuthenticatedUser) -> bool {
        user.can(Capability::ViewFinances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn member(role: UserRole, team_id: Uuid) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            team_id,
            role,
        }
    }

    #[test]
    fn test_other_team_is_forbidden() {
        let team = Uuid::new_v4();
        let manager = member(UserRole::Manager, team);

        assert!(AuthorizationService::ensure_same_team(&manager, team).is_ok());
        assert!(matches!(
            AuthorizationService::ensure_same_team(&manager, Uuid::new_v4()),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_capability_checks() {
        let team = Uuid::new_v4();
        let engineer = member(UserRole::Engineer, team);

        assert!(AuthorizationService::ensure_team_capability(&engineer, team, Capability::ManageVehicles).is_ok());
        assert!(matches!(
            AuthorizationService::ensure_team_capability(&engineer, team, Capability::ManageEvents),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_guest_cannot_write_anything() {
        let guest = member(UserRole::Guest, Uuid::new_v4());
        for capability in Capability::ALL {
            assert!(AuthorizationService::ensure_capability(&guest, capability).is_err());
        }
        assert!(!AuthorizationService::can_view_finances(&guest));
    }

    #[test]
    fn test_finance_views_costs() {
        let finance = member(UserRole::Finance, Uuid::new_v4());
        assert!(AuthorizationService::can_view_finances(&finance));
        assert!(AuthorizationService::ensure_capability(&finance, Capability::ManageFinances).is_ok());
        assert!(AuthorizationService::ensure_capability(&finance, Capability::ManageVehicles).is_err());
    }
}
