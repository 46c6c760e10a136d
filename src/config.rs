use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use crate::core::errors::CrudError;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(StorageBackend::Memory),
            "sqlite" => Some(StorageBackend::Sqlite),
            _ => None,
        }
    }
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    pub log_level: String,
    pub bcrypt_cost: u32,
    pub request_timeout_secs: u64,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("storage_backend", &self.storage_backend)
            .field("database_url", &"<redacted>")
            .field("database_max_connections", &self.database_max_connections)
            .field("log_level", &self.log_level)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed_var("PORT").unwrap_or(3000),
            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| StorageBackend::parse(&v))
                .unwrap_or(StorageBackend::Sqlite),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string()),
            database_max_connections: parsed_var("DATABASE_MAX_CONNECTIONS").unwrap_or(5),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            bcrypt_cost: parsed_var("BCRYPT_COST").unwrap_or(bcrypt::DEFAULT_COST),
            request_timeout_secs: parsed_var("REQUEST_TIMEOUT_SECS").unwrap_or(30),
        }
    }

    /// Rejects settings that would only fail once requests arrive.
    pub fn validate(&self) -> Result<(), CrudError> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.bcrypt_cost) {
            return Err(CrudError::InvalidConfig(format!(
                "BCRYPT_COST must be between {} and {}, got {}",
                BCRYPT_MIN_COST, BCRYPT_MAX_COST, self.bcrypt_cost
            )));
        }
        if self.database_max_connections == 0 {
            return Err(CrudError::InvalidConfig(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
