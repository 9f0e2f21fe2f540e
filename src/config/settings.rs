//! User settings for taxcost
//!
//! Settings only shape how the calculator is presented (locale, logging).
//! The calculator's own state is never written anywhere.

use std::path::PathBuf;

use serde::Deserialize;

use super::paths::TaxCostPaths;
use crate::error::TaxCostError;

/// User settings for taxcost
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// Locale tag overriding the host locale (e.g. "en_AU")
    #[serde(default)]
    pub locale: Option<String>,

    /// File to write logs to
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &TaxCostPaths) -> Result<Self, TaxCostError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TaxCostError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TaxCostError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, locale: Option<String>, log_file: Option<PathBuf>) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxCostPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxCostPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "locale": "en_AU", "log_file": "/tmp/taxcost.log" }"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.locale.as_deref(), Some("en_AU"));
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/taxcost.log")));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxCostPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, TaxCostError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings {
            locale: Some("de_DE".into()),
            log_file: None,
        }
        .with_overrides(None, Some(PathBuf::from("out.log")));

        assert_eq!(settings.locale.as_deref(), Some("de_DE"));
        assert_eq!(settings.log_file, Some(PathBuf::from("out.log")));

        let settings = settings.with_overrides(Some("fr_FR".into()), None);
        assert_eq!(settings.locale.as_deref(), Some("fr_FR"));
    }
}
