//! # themeswitch - light/dark theme preference controller
//!
//! `themeswitch` keeps a page's display mode in sync with the user's choice:
//! it reads a persisted preference, resolves it against the system color
//! scheme, stamps the result onto the document root, and cycles the mode when
//! the user clicks the toggle button.
//!
//! ## Core Concepts
//!
//! - [`ThemeMode`]: the user's preference (`auto`, `dark` or `light`)
//! - [`ColorMode`]: a concrete, renderable mode (`dark` or `light`)
//! - [`ThemeController`]: owns the mode and applies it
//! - [`PreferenceStore`]: client-local key-value storage ([`MemoryStore`], [`FileStore`])
//! - [`SystemPreference`]: the OS dark-mode signal ([`OsPreference`])
//! - [`Presentation`]: the element tree the mode is rendered onto ([`Document`])
//! - [`ToggleHandler`]: the click callback surface
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{
//!     ColorMode, ControllerConfig, Document, MemoryStore, ThemeController, ThemeMode,
//! };
//!
//! let store = MemoryStore::with_entry("theme", "dark");
//! let doc = Document::new().with_icon("#theme-toggle i", "bi");
//! let mut controller =
//!     ThemeController::load(store.clone(), ColorMode::Light, doc, ControllerConfig::default())
//!         .unwrap();
//!
//! // Stored preference wins over the system signal.
//! assert_eq!(controller.rendered(), Some(ColorMode::Dark));
//!
//! // auto -> dark -> light -> auto
//! assert_eq!(controller.toggle().unwrap(), ThemeMode::Light);
//! assert!(controller.target().icon("#theme-toggle i").unwrap().contains("bi-sun"));
//! assert_eq!(store.value("theme").as_deref(), Some("light"));
//! ```
//!
//! ## Cycles
//!
//! The default tri-state cycle goes auto → dark → light and keeps a three-way
//! icon in step. [`Cycle::Binary`] flips dark ⇄ light based on what is
//! currently rendered and never stores `auto`:
//!
//! ```rust
//! use themeswitch::{ColorMode, ControllerConfig, Document, MemoryStore, ThemeController};
//!
//! let store = MemoryStore::with_entry("theme", "light");
//! let config = ControllerConfig::binary();
//! let mut controller =
//!     ThemeController::load(store.clone(), ColorMode::Light, Document::new(), config).unwrap();
//! controller.toggle().unwrap();
//! assert_eq!(controller.rendered(), Some(ColorMode::Dark));
//! assert_eq!(store.value("theme").as_deref(), Some("dark"));
//! ```

pub mod config;
pub mod controller;
pub mod document;
mod error;
pub mod handler;
pub mod markup;
mod mode;
pub mod store;
pub mod system;

pub use config::{ControllerConfig, Cycle, IconClasses};
pub use controller::ThemeController;
pub use document::{ClassList, Document, Presentation};
pub use error::{ConfigError, ParseModeError, StoreError, ThemeError};
pub use handler::ToggleHandler;
pub use markup::{render_root_attribute, render_toggle_button, MarkupRenderer};
pub use mode::{ColorMode, ThemeMode};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use system::{
    detect_color_mode, reset_theme_detector, set_theme_detector, OsPreference, SystemPreference,
};
