//! JSON file configuration store.
//!
//! Implements [`ConfigPort`] for the host simulator.  The gadget build
//! would back the same port with flash; the file here plays that role.
//!
//! - Config validation: every field is range-checked on load and before
//!   persistence.  Invalid files are rejected, never clamped.
//! - Missing file: reported as [`ConfigError::NotFound`] so the caller can
//!   fall back to defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::GameConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "POCKETPET_CONFIG";

#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the path in [`CONFIG_ENV`], if it is set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(CONFIG_ENV).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, falling back to defaults on any failure.
    pub fn load_or_default(&self) -> GameConfig {
        match self.load() {
            Ok(cfg) => cfg,
            Err(ConfigError::NotFound) => {
                info!("JsonConfigStore: {} not found, using defaults", self.path.display());
                GameConfig::default()
            }
            Err(e) => {
                warn!("JsonConfigStore: {} rejected ({}), using defaults", self.path.display(), e);
                GameConfig::default()
            }
        }
    }
}

impl ConfigPort for JsonConfigStore {
    fn load(&self) -> Result<GameConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let cfg: GameConfig = serde_json::from_str(&text).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        info!("JsonConfigStore: loaded {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        std::fs::write(&self.path, text).map_err(|_| ConfigError::IoError)?;
        info!("JsonConfigStore: saved {}", self.path.display());
        Ok(())
    }
}
