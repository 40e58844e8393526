pub mod duration_format;

use crate::error::ConfigError;
use crate::http::RetryPolicy;
use crate::{DEFAULT_USER_AGENT, PRIMER_NAME};

use common::{ErrorLocation, HttpStatusCode, RedactedSecret};
use models::{MailProvider, SmtpSecurity};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "primer.toml";
const CONFIG_VERSION: u32 = 1;
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_timeout", with = "duration_format")]
    pub timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
            verify_tls: default_verify_tls(),
            retry: RetryPolicy::default(),
        }
    }
}

/// SMTP settings. A `provider` fills in host and security; explicit values win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default)]
    pub provider: Option<MailProvider>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub security: Option<SmtpSecurity>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<RedactedSecret>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default = "default_smtp_timeout", with = "duration_format")]
    pub timeout: Duration,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            provider: None,
            host: None,
            port: None,
            security: None,
            username: None,
            password: None,
            from: None,
            timeout: default_smtp_timeout(),
        }
    }
}

/// Where and how to reach the SMTP server, after provider defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpEndpoint {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
}

impl SmtpConfig {
    pub fn endpoint(&self) -> SmtpEndpoint {
        let security = self
            .security
            .or(self.provider.map(|provider| provider.security()))
            .unwrap_or_default();
        let host = self
            .host
            .clone()
            .or(self.provider.map(|provider| provider.host().to_string()))
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let port = self.port.unwrap_or(security.default_port());

        SmtpEndpoint {
            host,
            port,
            security,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Where `primer.log` goes: the configured directory, else
    /// `{data_local_dir}/primer/logs`.
    pub fn log_directory(&self) -> Option<PathBuf> {
        self.directory.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(PRIMER_NAME).join("logs"))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub smtp: SmtpConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            http: HttpConfig::default(),
            smtp: SmtpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_http_timeout() -> Duration {
    DEFAULT_HTTP_TIMEOUT
}
fn default_smtp_timeout() -> Duration {
    DEFAULT_SMTP_TIMEOUT
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_verify_tls() -> bool {
    true
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// `{config_dir}/primer/primer.toml` for the current platform.
    #[track_caller]
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(PRIMER_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load config from `path`.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: AppConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Save config to `path` using temp file + rename.
    ///
    /// The SMTP password is never written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension("toml.tmp");

        let serialized = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, serialized).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::validation(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        if self.http.timeout.is_zero() {
            return Err(ConfigError::validation("http.timeout must be greater than zero"));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigError::validation("http.user_agent cannot be empty"));
        }

        let retry = &self.http.retry;
        if retry.backoff_factor > retry.backoff_max {
            return Err(ConfigError::validation(format!(
                "http.retry.backoff_factor ({:?}) exceeds backoff_max ({:?})",
                retry.backoff_factor, retry.backoff_max
            )));
        }

        if let Some(code) = retry
            .status_forcelist
            .iter()
            .find(|code| !HttpStatusCode(**code).is_valid())
        {
            return Err(ConfigError::validation(format!(
                "http.retry.status_forcelist contains invalid status code {code}"
            )));
        }

        if self.smtp.port == Some(0) {
            return Err(ConfigError::validation("smtp.port must be non-zero"));
        }

        if let Some(ref host) = self.smtp.host {
            if host.trim().is_empty() {
                return Err(ConfigError::validation("smtp.host cannot be empty string"));
            }
        }

        if log_level_from_str(&self.logging.level).is_none() {
            return Err(ConfigError::validation(format!(
                "Invalid logging.level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Parse a textual log level (`off`, `error` ... `trace`), case-insensitive.
pub fn log_level_from_str(level: &str) -> Option<log::LevelFilter> {
    level.trim().parse().ok()
}
