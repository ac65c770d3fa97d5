use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use racing_team_management::config::{DatabaseConfig, EnvironmentConfig};
use racing_team_management::create_router;
use racing_team_management::database::DatabaseConnection;
use racing_team_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏎️ Racing Team Management API");
    info!("==============================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let database_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .context("HOST/PORT no forman una dirección válida")?;

    let app = create_router(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   GET  /api/reference/* - Catálogos");
    info!("🏁 Equipos:");
    info!("   POST /api/teams - Alta de equipo con su manager");
    info!("   GET|PUT|DELETE /api/teams/:id");
    info!("   GET  /api/teams/:id/dashboard");
    info!("👥 Miembros:");
    info!("   GET|POST /api/teams/:id/users");
    info!("   GET|PUT|DELETE /api/users/:id");
    info!("   GET  /api/users/:id/permissions");
    info!("🏍️ Vehículos:");
    info!("   GET|POST /api/teams/:id/vehicles");
    info!("   GET|PUT|DELETE /api/vehicles/:id");
    info!("   POST /api/vehicles/:id/usage");
    info!("   GET|POST /api/vehicles/:id/maintenance");
    info!("   GET|DELETE /api/maintenance/:id");
    info!("📅 Eventos:");
    info!("   GET|POST /api/teams/:id/events");
    info!("   GET|PUT|DELETE /api/events/:id");
    info!("   PUT|DELETE /api/events/:id/participants/:user_id");
    info!("   PUT|DELETE /api/events/:id/vehicles/:vehicle_id");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo escuchar en {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error del servidor")?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
