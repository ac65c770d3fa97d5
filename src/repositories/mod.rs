//! Acceso a PostgreSQL por entidad

pub mod event_repository;
pub mod maintenance_repository;
pub mod team_repository;
pub mod user_repository;
pub mod vehicle_repository;
