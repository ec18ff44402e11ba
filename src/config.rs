//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\book-minder\config.toml
//! - macOS: ~/Library/Application Support/book-minder/config.toml
//! - Linux: ~/.config/book-minder/config.toml
//!
//! Every section is optional; command-line flags and environment variables
//! override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::identifier::IdentifierMode;
use crate::resolver::Strategy;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog credentials
    pub credentials: Credentials,

    /// How identifiers are resolved
    pub resolution: ResolutionConfig,

    /// Web front end settings
    pub server: ServerConfig,
}

/// Catalog credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Rakuten Web Service application id
    pub rakuten_application_id: Option<String>,
}

/// Resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// "merge-fill" or "first-match"
    pub strategy: Strategy,

    /// Per-catalog request timeout in seconds
    pub timeout_secs: u64,

    /// "isbn" (10/13 digits) or "barcode" (any non-empty code)
    pub identifier_mode: IdentifierMode,

    /// Refuse to start without a Rakuten application id
    pub require_rakuten: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            timeout_secs: 5,
            identifier_mode: IdentifierMode::default(),
            require_rakuten: false,
        }
    }
}

impl ResolutionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Web front end settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Config {
    /// The Rakuten application id, if one is set and non-blank.
    pub fn rakuten_application_id(&self) -> Option<&str> {
        self.credentials
            .rakuten_application_id
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Check settings the whole service depends on.
    ///
    /// Run once at startup so a missing mandatory value fails fast instead
    /// of on every request.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.resolution.require_rakuten && self.rakuten_application_id().is_none() {
            return Err(crate::error::Error::config(
                "resolution.require_rakuten is set but no Rakuten application id is configured \
                 (set credentials.rakuten_application_id or RAKUTEN_APP_ID)",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("book-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
