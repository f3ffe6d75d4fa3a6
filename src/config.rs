// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

use crate::services::content::ContentPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    /// Scheme injected into links submitted without one.
    pub default_scheme: String,
    /// Reject links whose scheme is not `default_scheme`.
    pub strict_scheme: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let default_scheme = env::var("DEFAULT_SCHEME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "gemini".to_string());

        let strict_scheme = env::var("STRICT_SCHEME")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            db_max_connections,
            default_scheme,
            strict_scheme,
        })
    }

    pub fn content_policy(&self) -> ContentPolicy {
        ContentPolicy {
            default_scheme: self.default_scheme.clone(),
            strict_scheme: self.strict_scheme,
        }
    }
}
