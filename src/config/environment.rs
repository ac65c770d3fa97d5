//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            Err(_) => defaults.port,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|value| parse_list(&value))
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list("http://localhost:5173, https://racing.example.com,"),
            vec!["http://localhost:5173", "https://racing.example.com"]
        );
        assert!(parse_list("").is_empty());
    }
}
