//! User settings and directory resolution.
//!
//! Settings are stored inside the repository file (`lineups.json`) next to the
//! lineup records. The generated config files live inside the CS2
//! installation and their locations are derived from `cs2_path`.

use crate::constants::{DATA_DIR_ENV, DEFAULT_DATA_DIR_NAME, DEFAULT_SENSITIVITY};
use crate::error::{Error, Result};
use crate::services::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// CS2 installation directory, empty until configured
    #[serde(default)]
    pub cs2_path: String,
    /// In-game mouse sensitivity
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
}

fn default_sensitivity() -> f64 {
    DEFAULT_SENSITIVITY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cs2_path: String::new(),
            sensitivity: default_sensitivity(),
        }
    }
}

impl Settings {
    /// Whether the CS2 installation path has been set.
    pub fn is_configured(&self) -> bool {
        !self.cs2_path.trim().is_empty()
    }

    /// Directory the `.cfg` files are generated into.
    ///
    /// `{cs2_path}/csgo/cfg/CSAFAP`
    pub fn cfg_dir(&self) -> PathBuf {
        PathBuf::from(&self.cs2_path)
            .join("csgo")
            .join("cfg")
            .join("CSAFAP")
    }

    /// Directory holding `platform_english.txt`.
    ///
    /// `{cs2_path}/csgo/resource`
    pub fn resource_dir(&self) -> PathBuf {
        PathBuf::from(&self.cs2_path).join("csgo").join("resource")
    }

    /// Store over this installation's config and resource directories.
    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.cfg_dir(), self.resource_dir())
    }

    /// Validates setting values.
    ///
    /// Sensitivity must be a finite positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "sensitivity must be a positive number, got {}",
                self.sensitivity
            )));
        }
        Ok(())
    }
}

/// Directory holding `lineups.json`.
///
/// `$CSAFAP_DATA_DIR` if set, otherwise `~/.csafap`.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        Error::InvalidSettings(format!(
            "Failed to determine home directory; set {} instead",
            DATA_DIR_ENV
        ))
    })?;
    Ok(home.join(DEFAULT_DATA_DIR_NAME))
}
