//! Configuration type definitions
//!
//! `Config` covers the server-side knobs loaded through the `config` crate.
//! `SecretsConfig` is the immutable snapshot of the optional environment
//! values whose presence (never content) is reported by the API.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub service_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Snapshot of the optional environment values, taken once at startup.
///
/// Every field tolerates absence; an empty string counts as absent so that
/// presence always means "non-empty value". `api_keys_file_mounted` records
/// whether the configured key file existed at startup; its contents are
/// never read.
#[derive(Debug, Clone, Default)]
pub struct SecretsConfig {
    pub environment: Option<String>,
    pub app_name: Option<String>,
    pub weather_api_key: Option<String>,
    pub payment_api_key: Option<String>,
    pub encryption_key: Option<String>,
    pub smtp_password: Option<String>,
    pub api_keys_file_mounted: bool,
}

impl SecretsConfig {
    /// Read the snapshot from the process environment.
    pub fn from_env() -> Self {
        let api_keys_file = read_env("API_KEYS_FILE");
        Self {
            environment: read_env("ENVIRONMENT"),
            app_name: read_env("APP_NAME"),
            weather_api_key: read_env("WEATHER_API_KEY"),
            payment_api_key: read_env("PAYMENT_API_KEY"),
            encryption_key: read_env("ENCRYPTION_KEY"),
            smtp_password: read_env("SMTP_PASSWORD"),
            api_keys_file_mounted: api_keys_file
                .as_deref()
                .is_some_and(|p| Path::new(p).exists()),
        }
    }

    /// Environment label with the documented fallback.
    pub fn environment_or_default(&self) -> &str {
        self.environment.as_deref().unwrap_or("development")
    }

    /// Application name with the documented fallback.
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or("NIMC App")
    }
}

/// Read an environment variable, mapping empty values to `None`.
fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
