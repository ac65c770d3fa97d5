//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el frontend del equipo.

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use super::auth::USER_ID_HEADER;
use crate::config::EnvironmentConfig;

/// CORS según el entorno: permisivo sólo en desarrollo
pub fn cors_layer(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_development() {
        return CorsLayer::very_permissive();
    }
    if config.cors_origins.is_empty() {
        warn!(
            "⚠️ CORS_ORIGINS vacío en '{}': no se aceptan orígenes externos",
            config.environment
        );
    }
    cors_middleware_with_origins(&config.cors_origins)
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn allowed_origin(config: &EnvironmentConfig, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(config));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).cloned()
    }

    fn production(origins: &[&str]) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "production".to_string(),
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_development_mirrors_any_origin() {
        let origin = allowed_origin(&EnvironmentConfig::default(), "http://evil.example").await;
        assert_eq!(origin.unwrap(), "http://evil.example");
    }

    #[tokio::test]
    async fn test_production_without_origins_allows_none() {
        assert!(allowed_origin(&production(&[]), "http://evil.example").await.is_none());
    }

    #[tokio::test]
    async fn test_production_allows_listed_origins_only() {
        let config = production(&["https://racing.example.com"]);
        let allowed = allowed_origin(&config, "https://racing.example.com").await;
        assert_eq!(allowed.unwrap(), "https://racing.example.com");
        assert!(allowed_origin(&config, "http://evil.example").await.is_none());
    }
}
