//! Modelos del sistema
//!
//! Este módulo contiene los enums de referencia y las entidades que mapean
//! exactamente al schema PostgreSQL.

pub mod event;
pub mod event_status;
pub mod event_type;
pub mod maintenance_record;
pub mod maintenance_type;
pub mod team;
pub mod user;
pub mod user_role;
pub mod vehicle;
pub mod vehicle_category;
pub mod vehicle_status;
pub mod vehicle_type;

pub use event::Event;
pub use event_status::EventStatus;
pub use event_type::EventType;
pub use maintenance_record::MaintenanceRecord;
pub use maintenance_type::MaintenanceType;
pub use team::Team;
pub use user::User;
pub use user_role::{Capability, UserRole};
pub use vehicle::Vehicle;
pub use vehicle_category::VehicleCategory;
pub use vehicle_status::VehicleStatus;
pub use vehicle_type::VehicleType;
