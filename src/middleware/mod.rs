//! Middleware del sistema
//!
//! Identificación del usuario por cabecera y CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
