//! User-level configuration loaded from `~/.lost-found/config.toml`.
//!
//! The file is optional; absent keys fall back to their defaults and command
//! line flags override whatever the file says.
//!
//! ```toml
//! [store]
//! data_dir = "/srv/lost-found"
//!
//! [service]
//! store_timeout_secs = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::service::DEFAULT_STORE_TIMEOUT;
use crate::utils::{default_data_dir, get_app_path};

pub const USER_CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("service.store_timeout_secs must be at least 1")]
    ZeroStoreTimeout,
}

/// `[store]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding the collections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// `[service]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub service: ServiceSection,
}

impl UserConfig {
    /// `cli` if given, else the configured directory, else `~/.lost-found/data`.
    #[must_use]
    pub fn resolve_data_dir(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.store.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }

    /// `cli` seconds if given, else the configured value, else the default.
    /// Zero is never a usable bound and falls through to the next source.
    #[must_use]
    pub fn resolve_store_timeout(&self, cli: Option<u64>) -> Duration {
        cli.filter(|secs| *secs > 0)
            .or(self.service.store_timeout_secs.filter(|secs| *secs > 0))
            .map_or(DEFAULT_STORE_TIMEOUT, Duration::from_secs)
    }
}

/// `~/.lost-found/config.toml`
#[must_use]
pub fn user_config_path() -> PathBuf {
    get_app_path().join(USER_CONFIG_FILENAME)
}

/// Load the user configuration from its default location.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    load_user_config_from(&user_config_path())
}

/// Load a user configuration file. A missing file yields the defaults.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    if config.service.store_timeout_secs == Some(0) {
        return Err(UserConfigError::ZeroStoreTimeout);
    }
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}
