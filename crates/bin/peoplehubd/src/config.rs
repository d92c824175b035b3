//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `peoplehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use chrono::NaiveDate;
use serde::Deserialize;

use peoplehub_domain::collation::{Locale, UnsupportedLocale};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Person registry settings.
    pub people: PeopleConfig,
    /// Reference date settings.
    pub clock: ClockConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Person registry configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PeopleConfig {
    /// Locale tag used to order listings by name.
    pub locale: String,
    /// Insert the demo records at startup.
    pub seed_demo_data: bool,
}

/// Reference date configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pin "today" to this date instead of following the host calendar.
    pub fixed_date: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from `peoplehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// environment override cannot be parsed, or if the resulting
    /// configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("peoplehub.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("PEOPLEHUB_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("PEOPLEHUB_PORT") {
            self.server.port = parse_override("PEOPLEHUB_PORT", &val)?;
        }
        if let Some(val) = var("PEOPLEHUB_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("PEOPLEHUB_BIND '{val}' is not host:port"))
            })?;
            self.server.port = parse_override("PEOPLEHUB_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = var("PEOPLEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("PEOPLEHUB_LOCALE") {
            self.people.locale = val;
        }
        if let Some(val) = var("PEOPLEHUB_SEED") {
            self.people.seed_demo_data = parse_override("PEOPLEHUB_SEED", &val)?;
        }
        if let Some(val) = var("PEOPLEHUB_TODAY") {
            self.clock.fixed_date = Some(parse_override("PEOPLEHUB_TODAY", &val)?);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.locale()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the collation locale for listings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Locale`] when the tag is not supported.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Ok(self.people.locale.parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "peoplehubd=info,peoplehub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for PeopleConfig {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr.to_string(),
            seed_demo_data: true,
        }
    }
}

fn parse_override<T>(key: &str, val: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.trim()
        .parse()
        .map_err(|err| ConfigError::Validation(format!("{key} '{val}': {err}")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Unsupported collation locale.
    #[error("invalid configuration: {0}")]
    Locale(#[from] UnsupportedLocale),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
