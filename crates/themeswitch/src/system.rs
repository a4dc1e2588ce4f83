//! System color-scheme preference.
//!
//! The controller never queries the OS directly; it asks a
//! [`SystemPreference`] handed to it at construction. [`OsPreference`] is the
//! production implementation and goes through a process-wide detector that
//! defaults to the OS query and can be replaced with [`set_theme_detector`]:
//!
//! ```rust
//! use themeswitch::{set_theme_detector, ColorMode, OsPreference, SystemPreference};
//!
//! set_theme_detector(|| ColorMode::Dark);
//! assert_eq!(OsPreference.color_mode(), ColorMode::Dark);
//! # themeswitch::reset_theme_detector();
//! ```

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::mode::ColorMode;

/// Read-only source of the user's system-level dark/light preference.
pub trait SystemPreference {
    /// The concrete mode the system currently prefers.
    fn color_mode(&self) -> ColorMode;
}

/// A fixed signal, mostly useful for tests and forced modes.
impl SystemPreference for ColorMode {
    fn color_mode(&self) -> ColorMode {
        *self
    }
}

impl<F> SystemPreference for F
where
    F: Fn() -> ColorMode,
{
    fn color_mode(&self) -> ColorMode {
        self()
    }
}

/// Reads the preference through the process-wide detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPreference;

impl SystemPreference for OsPreference {
    fn color_mode(&self) -> ColorMode {
        detect_color_mode()
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

/// Queries the configured detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mode = (*detector)();
    tracing::trace!(%mode, "detected system color mode");
    mode
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_theme_detector_override() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(OsPreference.color_mode(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(OsPreference.color_mode(), ColorMode::Light);

        reset_theme_detector();
    }

    #[test]
    fn test_fixed_signal() {
        assert_eq!(ColorMode::Light.color_mode(), ColorMode::Light);
        assert_eq!(ColorMode::Dark.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_closure_signal() {
        let signal = || ColorMode::Dark;
        assert_eq!(signal.color_mode(), ColorMode::Dark);
    }
}
