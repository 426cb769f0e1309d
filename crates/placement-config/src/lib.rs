//! # placement-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLACEMENT_*` prefix, `__` as separator)
//! 2. Project-level `.placement/config.toml`
//! 3. User-level `~/.config/placement/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLACEMENT_BACKEND__URL` -> `backend.url`,
//! `PLACEMENT_BACKEND__ANON_KEY` -> `backend.anon_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use placement_config::PlacementConfig;
//!
//! let config = PlacementConfig::load_with_dotenv().expect("config");
//! let backend = config.require_backend().expect("backend must be configured");
//! println!("Backend: {}", backend.url);
//! ```

mod backend;
mod error;
mod general;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "PLACEMENT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlacementConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".placement/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Return the backend section, refusing to continue if it is incomplete.
    ///
    /// The CLI calls this before touching the network; a missing URL or key
    /// stops the process.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`BackendConfig::validate`].
    pub fn require_backend(&self) -> Result<&BackendConfig, ConfigError> {
        self.backend.validate()?;
        Ok(&self.backend)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("placement").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_not_configured() {
        let config = PlacementConfig::default();
        assert!(!config.backend.is_configured());
        assert!(config.require_backend().is_err());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PlacementConfig = PlacementConfig::figment().extract()?;
            assert!(!config.backend.is_configured());
            assert_eq!(config.backend.request_timeout_secs, 10);
            Ok(())
        });
    }
}
