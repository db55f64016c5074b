//! Service configuration
//!
//! Settings come from built-in defaults, an optional `catalog.toml` next to
//! the working directory, then environment variables (`PORT`,
//! `DATABASE_URL`, `JWT_SECRET`, ...), each layer overriding the previous.

use common::database::{DEFAULT_DATABASE_URL, DatabaseConfig};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::jwt::{DEFAULT_TOKEN_EXPIRY, JwtConfig};

/// Which entity store backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Process-wide settings, immutable once loaded
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiry_seconds: u64,
}

impl Settings {
    /// Load settings from defaults, `catalog.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3005)?
            .set_default("store", "postgres")?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("database_max_connections", 10)?
            .set_default("jwt_secret", "")?
            .set_default("jwt_expiry_seconds", DEFAULT_TOKEN_EXPIRY as i64)?
            .add_source(File::with_name("catalog").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address the HTTP listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            database_url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            ..DatabaseConfig::default()
        }
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            token_expiry: self.jwt_expiry_seconds,
        }
    }
}
