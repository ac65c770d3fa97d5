//! Services module
//!
//! Lógica que no pertenece a un único repositorio: reglas de acceso
//! y el resumen del equipo.

pub mod authorization_service;
pub mod dashboard_service;

pub use authorization_service::AuthorizationService;
pub use dashboard_service::DashboardService;
