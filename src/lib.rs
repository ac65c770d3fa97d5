//! Backend de gestión de equipos de competición
//!
//! API REST para equipos, miembros, vehículos con su historial de
//! mantenimiento y el calendario de eventos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{auth_middleware, cors_layer};
use crate::routes::{
    event_routes, maintenance_routes, reference_routes, team_routes, user_routes, vehicle_routes,
};
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(team_routes::create_team_router())
        .merge(user_routes::create_user_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(maintenance_routes::create_maintenance_router())
        .merge(event_routes::create_event_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let api = Router::new()
        .merge(team_routes::create_bootstrap_router())
        .nest("/reference", reference_routes::create_reference_router())
        .merge(protected);

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}
