//! Controller configuration.
//!
//! Defaults match a Bootstrap page: the preference lives under `theme`, the
//! resolved mode goes to `data-bs-theme`, and the toggle icon uses Bootstrap
//! Icons classes. Any field may be omitted from YAML:
//!
//! ```yaml
//! storage_key: theme
//! attribute: data-bs-theme
//! cycle: tri-state
//! icon:
//!   selector: "#theme-toggle i"
//!   auto: bi-circle-half
//!   dark: bi-moon
//!   light: bi-sun
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::mode::ThemeMode;

/// Which modes a toggle cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cycle {
    /// auto → dark → light → auto, with icon updates.
    #[default]
    TriState,
    /// dark ⇄ light, read back from the rendered attribute.
    Binary,
}

/// Icon element lookup and per-mode classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconClasses {
    pub selector: String,
    pub auto: String,
    pub dark: String,
    pub light: String,
}

impl Default for IconClasses {
    fn default() -> Self {
        Self {
            selector: "#theme-toggle i".to_string(),
            auto: "bi-circle-half".to_string(),
            dark: "bi-moon".to_string(),
            light: "bi-sun".to_string(),
        }
    }
}

impl IconClasses {
    /// The class shown for `mode`.
    pub fn class_for(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Auto => &self.auto,
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Key of the persisted preference.
    pub storage_key: String,
    /// Root attribute receiving the resolved mode.
    pub attribute: String,
    pub cycle: Cycle,
    pub icon: IconClasses,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-bs-theme".to_string(),
            cycle: Cycle::TriState,
            icon: IconClasses::default(),
        }
    }
}

impl ControllerConfig {
    /// Default configuration with the binary dark/light cycle.
    pub fn binary() -> Self {
        Self {
            cycle: Cycle::Binary,
            ..Self::default()
        }
    }

    /// Parses YAML, filling omitted fields with defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeswitch::{ControllerConfig, Cycle};
    ///
    /// let config = ControllerConfig::from_yaml("cycle: binary\nattribute: data-theme\n").unwrap();
    /// assert_eq!(config.cycle, Cycle::Binary);
    /// assert_eq!(config.attribute, "data-theme");
    /// assert_eq!(config.storage_key, "theme");
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = if source.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Rejects empty keys and class names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("icon.selector", &self.icon.selector),
            ("icon.auto", &self.icon.auto),
            ("icon.dark", &self.icon.dark),
            ("icon.light", &self.icon.light),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-bs-theme");
        assert_eq!(config.cycle, Cycle::TriState);
        assert_eq!(config.icon.class_for(ThemeMode::Light), "bi-sun");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ControllerConfig::from_yaml("").unwrap(),
            ControllerConfig::default()
        );
    }

    #[test]
    fn test_partial_icon_section() {
        let yaml = "icon:\n  dark: fa-moon\n";
        let config = ControllerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.icon.dark, "fa-moon");
        assert_eq!(config.icon.light, "bi-sun");
        assert_eq!(config.icon.selector, "#theme-toggle i");
    }

    #[test]
    fn test_unknown_cycle_rejected() {
        let err = ControllerConfig::from_yaml("cycle: quad\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_empty_field_rejected() {
        let yaml = "storage_key: \"\"\n";
        let err = ControllerConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "storage_key" }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "cycle: binary\n").unwrap();
        let config = ControllerConfig::from_file(&path).unwrap();
        assert_eq!(config.cycle, Cycle::Binary);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/theme.yaml");
        let err = ControllerConfig::from_file(path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
