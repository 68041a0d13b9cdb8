//! Application settings, persisted as JSON under the platform config
//! directory. Loading is tolerant: a missing file yields defaults, a
//! corrupt file is an error surfaced to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::{AdvancedOptions, SortMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Suppress the insecure-environment warning at startup.
    pub skip_insecure_warning: bool,
    /// Last used advanced-search options, restored on startup.
    pub advanced: AdvancedOptions,
    /// Last used sort order.
    pub sort: SortMode,
    /// Locale identifier for the string table.
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skip_insecure_warning: false,
            advanced: AdvancedOptions::default(),
            sort: SortMode::default(),
            locale: "en".to_string(),
        }
    }
}

impl Settings {
    /// Default settings location: `<config dir>/keyrack/settings.json`.
    pub fn default_path() -> Result<PathBuf, CoreError> {
        let dir = dirs::config_dir().ok_or(CoreError::NoConfigDir)?;
        Ok(dir.join("keyrack").join("settings.json"))
    }

    pub fn load(path: &Path) -> Result<Settings, CoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::ConfigWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(CoreError::ConfigSerialize)?;
        fs::write(path, raw).map_err(|e| CoreError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::OptionKey;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert!(!settings.skip_insecure_warning);
        assert_eq!(settings.locale, "en");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("settings.json");

        let mut settings = Settings::default();
        settings.skip_insecure_warning = true;
        settings.advanced.set(OptionKey::Regex, true);
        settings.sort = SortMode::UpdatedDesc;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert!(loaded.skip_insecure_warning);
        assert!(loaded.advanced.regex);
        assert_eq!(loaded.sort, SortMode::UpdatedDesc);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(CoreError::ConfigParse { .. })
        ));
    }
}
