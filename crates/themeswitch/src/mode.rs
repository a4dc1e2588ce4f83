//! Theme modes and their cycling rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// A concrete, renderable color mode.
///
/// This is what ends up in the document's root attribute. It never carries
/// an "auto" value; auto is resolved against the system preference first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the wire string (`"light"` or `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseModeError::new(other)),
        }
    }
}

/// The user's selected theme preference.
///
/// `Auto` defers to the system preference when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    /// All modes in tri-state cycle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light];

    /// Returns the wire string stored under the preference key.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Resolves to a concrete mode, consulting `system` only for `Auto`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeswitch::{ColorMode, ThemeMode};
    ///
    /// assert_eq!(ThemeMode::Auto.resolve(ColorMode::Dark), ColorMode::Dark);
    /// assert_eq!(ThemeMode::Light.resolve(ColorMode::Dark), ColorMode::Light);
    /// ```
    pub fn resolve(self, system: ColorMode) -> ColorMode {
        match self {
            ThemeMode::Auto => system,
            ThemeMode::Dark => ColorMode::Dark,
            ThemeMode::Light => ColorMode::Light,
        }
    }

    /// Next mode in the tri-state cycle: auto → dark → light → auto.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Auto => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Auto,
        }
    }

    /// Returns the concrete mode this preference pins, or `None` for `Auto`.
    pub fn concrete(self) -> Option<ColorMode> {
        match self {
            ThemeMode::Auto => None,
            ThemeMode::Dark => Some(ColorMode::Dark),
            ThemeMode::Light => Some(ColorMode::Light),
        }
    }
}

impl From<ColorMode> for ThemeMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemeMode::Auto),
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseModeError::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_parse_and_display() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
        assert!("auto".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_next_cycles_through_all_modes() {
        assert_eq!(ThemeMode::Auto.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Auto);
    }

    #[test]
    fn test_resolve_never_returns_auto() {
        for mode in ThemeMode::ALL {
            for system in [ColorMode::Light, ColorMode::Dark] {
                let resolved = mode.resolve(system);
                match mode.concrete() {
                    Some(pinned) => assert_eq!(resolved, pinned),
                    None => assert_eq!(resolved, system),
                }
            }
        }
    }

    #[test]
    fn test_flipped_is_involution() {
        assert_eq!(ColorMode::Dark.flipped(), ColorMode::Light);
        assert_eq!(ColorMode::Light.flipped().flipped(), ColorMode::Light);
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&ThemeMode::Auto).unwrap(), "\"auto\"");
        let parsed: ColorMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ColorMode::Dark);
    }
}
