use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

use super::{env_lookup, setting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("unknown STORAGE backend: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub storage: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = setting(&lookup, "PORT", "3000")?;
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "public".to_string());
        let storage = lookup("STORAGE")
            .unwrap_or_else(|| "postgres".to_string())
            .parse::<StorageBackend>()
            .context("invalid value for STORAGE")?;

        Ok(AppConfig {
            host,
            port,
            static_dir: PathBuf::from(static_dir),
            storage,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("postgres".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
        assert_eq!(" Memory ".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("mongo".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "STORAGE" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.storage, StorageBackend::Memory);

        let error = AppConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string())).unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("public"),
            storage: StorageBackend::Memory,
        };
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}
