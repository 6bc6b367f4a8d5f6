//! Bootstrap configuration loading
//!
//! Settings are resolved once at startup, in priority order:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. TOML config file
//! 4. Compiled defaults (fallback)
//!
//! Tiers 1 and 2 arrive together as [`ConfigOverrides`]; the binary reads
//! them through clap. Nothing here can change while the service runs.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default store file, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "./cricketMatchDetails.db";

/// Configuration file name looked up under the platform config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration loaded from a TOML file
///
/// Every key is optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the SQLite store file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    ///
    /// Read and parse failures are reported as [`Error::Config`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Find the config file to load, if any
///
/// An explicit path is returned only when it exists. Otherwise
/// `<config_dir>/cricket/config.toml` is tried.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => path.exists().then(|| path.to_path_buf()),
        None => default_config_path().filter(|path| path.exists()),
    }
}

/// Platform location of the config file (`~/.config/cricket/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cricket").join(CONFIG_FILE_NAME))
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge overrides over the TOML file over compiled defaults
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Self {
        Self {
            database_path: overrides
                .database_path
                .or(toml_config.database_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            host: overrides
                .host
                .or(toml_config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(toml_config.port).unwrap_or(DEFAULT_PORT),
            log_level: overrides.log_level.unwrap_or(toml_config.logging.level),
        }
    }

    /// `host:port` string for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::resolve(ConfigOverrides::default(), TomlConfig::default())
    }
}
