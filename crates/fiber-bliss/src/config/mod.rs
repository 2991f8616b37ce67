use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::content::DEFAULT_HERO_IMAGE_URL;

/// Deployment stage the pages are served for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the service needs at startup, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub content: ContentConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");
        let hero_image_url = var_or("APP_HERO_IMAGE_URL", DEFAULT_HERO_IMAGE_URL);

        let max_entries = positive_var("APP_SESSION_MAX_ENTRIES", DEFAULT_SESSION_MAX_ENTRIES)?;
        let idle_secs = positive_var("APP_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            content: ContentConfig { hero_image_url },
            sessions: SessionConfig {
                max_entries,
                idle_timeout: Duration::from_secs(idle_secs),
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn positive_var(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or(ConfigError::InvalidSessionLimit { key }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Overrides for the externally hosted page content.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub hero_image_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            hero_image_url: DEFAULT_HERO_IMAGE_URL.to_string(),
        }
    }
}

pub const DEFAULT_SESSION_MAX_ENTRIES: u64 = 10_000;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Bounds on the careers portal session map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_entries: u64,
    /// Sessions untouched for this long are dropped.
    pub idle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_SESSION_MAX_ENTRIES,
            idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{key} must be a positive integer")]
    InvalidSessionLimit { key: &'static str },
}
