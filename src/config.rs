//! Configuration loading and constants.
//!
//! Settings are resolved once at startup from, in order of priority: command
//! line flags, environment variables, an optional TOML file, and the built-in
//! defaults below. `AppConfig` is the root configuration struct; it is
//! immutable after `resolve` returns.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Service identifier reported by the health endpoint
pub const SERVICE_NAME: &str = "2bcloud-assignment-app";

/// Service version reported by the health endpoint
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status reported by the health endpoint while the process is serving
pub const HEALTH_STATUS: &str = "healthy";

/// Welcome text appended to the greeting
pub const WELCOME_MESSAGE: &str = "Welcome to 2bcloud Assignment!";

/// Hostname used when neither the OS nor the environment provides one
pub const FALLBACK_HOSTNAME: &str = "localhost";

// =============================================================================
// Load Generation
// =============================================================================

/// Loop iterations performed per unit of the `/stress/{n}` parameter
pub const ITERATIONS_PER_UNIT: i64 = 1_000_000;

// =============================================================================
// HTTP
// =============================================================================

/// Default listen port when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Dynamic responses (health probes, load results) must never be cached
pub const HTTP_CACHE_NO_STORE_MAX_AGE: u32 = 0;

pub const CACHE_CONTROL_NO_STORE: &str =
    formatcp!("no-store, max-age={}", HTTP_CACHE_NO_STORE_MAX_AGE);

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info", env!("CARGO_CRATE_NAME"));

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Identity overrides
    #[serde(default)]
    pub service: ServiceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Identity settings. Only the hostname can be overridden; the health payload
/// is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Hostname reported in responses (default: the OS hostname)
    pub hostname: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether the json formatter was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Values from the command line (and their environment fallbacks) that take
/// precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the effective configuration: the file (if any) or defaults, with
    /// `overrides` applied on top.
    pub fn resolve<P: AsRef<Path>>(
        path: Option<P>,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(host) = overrides.host {
            config.http.host = host;
        }
        if let Some(port) = overrides.port {
            config.http.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        if let Some(hostname) = &self.service.hostname {
            if hostname.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "service.hostname must not be empty when set".to_string(),
                ));
            }
        }
        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
