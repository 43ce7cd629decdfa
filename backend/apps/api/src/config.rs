//! Server Configuration
//!
//! Everything the binary reads from the environment.

use anyhow::{Context, bail};
use auth::AuthConfig;
use registry::RegistryConfig;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub registry: RegistryConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; `var` returns `None` for unset keys.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url =
            var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = parse_or(&var, "API_PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(&var, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let password_pepper = var("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        let auth = match var("SECRET_KEY") {
            Some(secret) if !secret.is_empty() => AuthConfig::with_secret(secret),
            _ if cfg!(debug_assertions) => {
                tracing::warn!("SECRET_KEY not set, using a random per-process secret");
                AuthConfig::development()
            }
            _ => bail!("SECRET_KEY must be set in production"),
        };

        Ok(Self {
            database_url,
            max_connections,
            port,
            frontend_origins,
            auth: AuthConfig {
                password_pepper: password_pepper.clone(),
                ..auth
            },
            registry: RegistryConfig { password_pepper },
        })
    }
}

fn parse_or<T>(
    var: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
