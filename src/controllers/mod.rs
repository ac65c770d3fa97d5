//! Controladores
//!
//! Validan la request, aplican las reglas de acceso y orquestan los
//! repositorios.

pub mod event_controller;
pub mod maintenance_controller;
pub mod team_controller;
pub mod user_controller;
pub mod vehicle_controller;
