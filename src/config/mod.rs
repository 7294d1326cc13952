//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, with every field
//! defaulted, and is then adjusted by environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `PAYMENTS_HOST` | `server.host` |
//! | `PAYMENTS_PORT` | `server.port` |
//! | `PAYMENTS_LOG_FILTER` | `server.log_filter` |
//! | `PAYMENTS_STORAGE` | `storage.backend` (`in_memory` or `dynamodb`) |
//! | `PAYMENTS_TABLE_NAME` | `storage.table_name` |
//! | `PAYMENTS_CURRENCY_INDEX` | `storage.currency_index` |
//! | `AWS_REGION` | `storage.region` |
//! | `PAYMENTS_DYNAMODB_ENDPOINT` | `storage.endpoint_url` |

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value '{value}' for {variable}: {message}")]
    InvalidEnv {
        variable: String,
        value: String,
        message: String,
    },
}

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    #[serde(rename = "dynamodb")]
    DynamoDb,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in_memory" | "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "dynamodb" => Ok(StorageBackend::DynamoDb),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow any origin and any method
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
        }
    }
}

/// Record store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Table keyed by `paymentId`
    pub table_name: String,

    /// Global secondary index keyed by `currency`
    pub currency_index: String,

    pub region: Option<String>,

    /// Override for local DynamoDB endpoints
    pub endpoint_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            table_name: "Payments".to_string(),
            currency_index: "currencyIndex".to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from `PAYMENTS_CONFIG` if set, then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var("PAYMENTS_CONFIG") {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup
    ///
    /// Taking the lookup as a closure keeps tests independent of the process
    /// environment.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("PAYMENTS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PAYMENTS_PORT") {
            self.server.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    variable: "PAYMENTS_PORT".to_string(),
                    value: port.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(filter) = lookup("PAYMENTS_LOG_FILTER") {
            self.server.log_filter = filter;
        }
        if let Some(backend) = lookup("PAYMENTS_STORAGE") {
            self.storage.backend = backend.parse().map_err(|message| ConfigError::InvalidEnv {
                variable: "PAYMENTS_STORAGE".to_string(),
                value: backend.clone(),
                message,
            })?;
        }
        if let Some(table) = lookup("PAYMENTS_TABLE_NAME") {
            self.storage.table_name = table;
        }
        if let Some(index) = lookup("PAYMENTS_CURRENCY_INDEX") {
            self.storage.currency_index = index;
        }
        if let Some(region) = lookup("AWS_REGION") {
            self.storage.region = Some(region);
        }
        if let Some(endpoint) = lookup("PAYMENTS_DYNAMODB_ENDPOINT") {
            self.storage.endpoint_url = Some(endpoint);
        }
        Ok(self)
    }
}
