//! Configuração de variáveis de ambiente
//!
//! Todas as variáveis têm valor padrão; um valor inválido é erro de
//! inicialização, nunca pânico.

use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Onde os documentos ficam gravados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("STORAGE_BACKEND inválido: '{}'", other)),
        }
    }
}

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub storage_backend: StorageBackend,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            storage_backend: StorageBackend::Postgres,
        }
    }
}

impl EnvironmentConfig {
    /// Lê a configuração do ambiente do processo
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            storage_backend: parse_var("STORAGE_BACKEND", defaults.storage_backend)?,
        })
    }

    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Nível de log quando `RUST_LOG` não está definido
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "debug"
        } else {
            "info"
        }
    }

    /// Endereço do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} inválido ('{}'): {}", name, raw, e)),
        _ => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!(" Postgres ".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_origins_skip_blanks() {
        assert_eq!(
            parse_origins("http://localhost:5173, ,https://painel.exemplo.com"),
            vec!["http://localhost:5173", "https://painel.exemplo.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.default_log_filter(), "debug");

        let production = EnvironmentConfig {
            environment: "production".to_string(),
            ..EnvironmentConfig::default()
        };
        assert_eq!(production.default_log_filter(), "info");
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
