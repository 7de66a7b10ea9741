// Environment-driven configuration

pub mod app;
pub mod database;

pub use app::{AppConfig, StorageBackend};
pub use database::DatabaseConfig;

use anyhow::{Context, Result};
use std::str::FromStr;

/// Reads `key` through `lookup`, falling back to `default` when unset, and
/// parses it. Parse failures name the offending variable.
fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value for {key}: {raw:?}"))
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
