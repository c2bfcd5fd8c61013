//! Application configuration.
//!
//! Loaded from `config.toml` in the data directory, then overridden by the
//! `REHABTRACK_DATABASE_URL` and `REHABTRACK_APP_PASSWORD` environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use subtle::ConstantTimeEq;

/// Environment variable overriding the database location.
pub const DATABASE_URL_ENV: &str = "REHABTRACK_DATABASE_URL";
/// Environment variable overriding the app password.
pub const APP_PASSWORD_ENV: &str = "REHABTRACK_APP_PASSWORD";
/// Password used when none is configured.
pub const DEFAULT_APP_PASSWORD: &str = "aclrehab";
/// Database file name used when no URL is configured.
pub const DEFAULT_DATABASE_FILE: &str = "rehabtrack.db";

/// Which record store backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One CSV file per collection in the data directory
    Csv,
    /// SQLite database with user accounts
    #[default]
    Sqlite,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Csv => write!(f, "csv"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Backend::Csv),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(ConfigError::ParseError(format!("Unknown backend: {}", other))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Record store backend
    pub backend: Backend,
    /// Directory for CSV files and the default database
    pub data_dir: PathBuf,
    /// SQLite database path, defaults to `<data_dir>/rehabtrack.db`
    pub database_url: Option<String>,
    /// Shared password gating the CSV backend
    pub app_password: String,
    /// User to act as when none is given on the command line
    pub default_user: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: Backend::default(),
            data_dir: get_data_dir(),
            database_url: None,
            app_password: DEFAULT_APP_PASSWORD.to_string(),
            default_user: "default".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolved SQLite database path.
    pub fn database_path(&self) -> PathBuf {
        match &self.database_url {
            Some(url) => PathBuf::from(url.strip_prefix("sqlite://").unwrap_or(url)),
            None => self.data_dir.join(DEFAULT_DATABASE_FILE),
        }
    }

    /// Check a password against the configured app password.
    pub fn check_app_password(&self, candidate: &str) -> bool {
        bool::from(candidate.as_bytes().ct_eq(self.app_password.as_bytes()))
    }

    /// Apply environment overrides from `lookup`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.database_url = Some(url);
        }
        if let Some(password) = lookup(APP_PASSWORD_ENV).filter(|v| !v.is_empty()) {
            self.app_password = password;
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rehabtrack", "RehabTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default path.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist. Environment overrides are applied last.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let mut config = read_config_file(path)?;
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
