use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::path::PathBuf;

use axum::http::HeaderValue;
use spriint_storage::StorageConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid max connections: {0}")]
    InvalidMaxConnections(String),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

/// Where browsers may call the API from
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: CorsOrigin,
    pub database_path: PathBuf,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4001".to_string());
        let port = parse_port(&port_str)?;

        let host_str = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let host = parse_host(&host_str)?;

        let cors_origin = parse_cors_origin(
            &env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        )?;

        let database_path = env::var("SPRIINT_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| spriint_core::default_database_path());

        let max_connections = match env::var("SPRIINT_DB_MAX_CONNECTIONS") {
            Ok(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(value)),
            },
            Err(_) => 5,
        };

        Ok(Config {
            host,
            port,
            cors_origin,
            database_path,
            max_connections,
        })
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            path: self.database_path.clone(),
            max_connections: self.max_connections,
            ..StorageConfig::default()
        }
    }
}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let port = value.trim().parse::<u16>()?;

    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }

    Ok(port)
}

pub fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(value.to_string()))
}

/// `*` allows any origin; anything else must be a valid header value
pub fn parse_cors_origin(value: &str) -> Result<CorsOrigin, ConfigError> {
    let trimmed = value.trim();
    if trimmed == "*" {
        return Ok(CorsOrigin::Any);
    }

    trimmed
        .parse::<HeaderValue>()
        .map(CorsOrigin::Exact)
        .map_err(|_| ConfigError::InvalidCorsOrigin(value.to_string()))
}
