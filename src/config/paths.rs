//! Path management for taxcost
//!
//! ## Path Resolution Order
//!
//! 1. `TAXCOST_CONFIG_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/taxcost`
//! 3. The platform config directory (`~/.config/taxcost`, `%APPDATA%\taxcost`, ...)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TaxCostError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TAXCOST_CONFIG_DIR";

/// Manages all paths used by taxcost
#[derive(Debug, Clone)]
pub struct TaxCostPaths {
    /// Base directory for all taxcost files
    base_dir: PathBuf,
}

impl TaxCostPaths {
    /// Create a new TaxCostPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, TaxCostError> {
        if let Some(custom) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_base_dir(PathBuf::from(custom)));
        }

        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Ok(Self::with_base_dir(PathBuf::from(xdg).join("taxcost")));
        }

        let base_dirs = BaseDirs::new().ok_or_else(|| {
            TaxCostError::Config("Could not determine a config directory".into())
        })?;
        Ok(Self::with_base_dir(base_dirs.config_dir().join("taxcost")))
    }

    /// Create TaxCostPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}
