//! The theme controller.
//!
//! A [`ThemeController`] owns the current mode together with the three
//! handles it needs: where the preference is persisted, where the system
//! preference is read from, and where the resolved mode is rendered.
//!
//! ```rust
//! use themeswitch::{
//!     ColorMode, ControllerConfig, Document, MemoryStore, ThemeController, ThemeMode,
//! };
//!
//! let store = MemoryStore::new();
//! let doc = Document::new().with_icon("#theme-toggle i", "bi");
//! let mut controller =
//!     ThemeController::load(store.clone(), ColorMode::Dark, doc, ControllerConfig::default())
//!         .unwrap();
//!
//! assert_eq!(controller.mode(), ThemeMode::Auto);
//! assert_eq!(controller.rendered(), Some(ColorMode::Dark));
//!
//! controller.toggle().unwrap();
//! assert_eq!(store.value("theme").as_deref(), Some("dark"));
//! ```

use crate::config::{ControllerConfig, Cycle};
use crate::document::Presentation;
use crate::error::ThemeError;
use crate::mode::{ColorMode, ThemeMode};
use crate::store::PreferenceStore;
use crate::system::SystemPreference;

/// Current theme preference plus the handles it is read from and rendered to.
pub struct ThemeController<S, D, P> {
    store: S,
    system: D,
    target: P,
    config: ControllerConfig,
    mode: ThemeMode,
}

impl<S, D, P> std::fmt::Debug for ThemeController<S, D, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("cycle", &self.config.cycle)
            .finish_non_exhaustive()
    }
}

impl<S, D, P> ThemeController<S, D, P>
where
    S: PreferenceStore,
    D: SystemPreference,
    P: Presentation,
{
    /// Seeds the mode from the store and renders it once.
    ///
    /// With no stored preference the tri-state cycle starts at `auto` and the
    /// binary cycle starts at the system preference. A stored value that is
    /// not a mode of the configured cycle is ignored with a warning.
    ///
    /// A missing tri-state icon does not fail the load: the root attribute is
    /// rendered, the fault is logged, and the controller is returned so later
    /// toggles still persist and re-render. Call [`apply`](Self::apply) to
    /// observe the icon fault directly.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Store`] when the store cannot be read.
    pub fn load(
        store: S,
        system: D,
        target: P,
        config: ControllerConfig,
    ) -> Result<Self, ThemeError> {
        let mut controller = Self::detached(store, system, target, config)?;
        match controller.apply() {
            Ok(_) => {}
            Err(err @ ThemeError::IconNotFound { .. }) => {
                tracing::warn!(%err, "initial theme render incomplete");
            }
            Err(err) => return Err(err),
        }
        Ok(controller)
    }

    /// Like [`load`](Self::load), but does not touch the presentation target.
    pub fn detached(
        store: S,
        system: D,
        target: P,
        config: ControllerConfig,
    ) -> Result<Self, ThemeError> {
        let stored = store.get(&config.storage_key)?;
        let cycle = config.cycle;
        let mode = match stored.as_deref().and_then(|raw| parse_stored(raw, cycle)) {
            Some(mode) => mode,
            None => initial_mode(cycle, &system),
        };
        tracing::debug!(%mode, stored = ?stored, cycle = ?config.cycle, "seeded theme mode");
        Ok(Self {
            store,
            system,
            target,
            config,
            mode,
        })
    }

    /// The in-memory mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn target(&self) -> &P {
        &self.target
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the current mode against the system preference.
    pub fn resolve(&self) -> ColorMode {
        self.mode.resolve(self.system.color_mode())
    }

    /// The concrete mode currently on the root attribute, if it holds one.
    pub fn rendered(&self) -> Option<ColorMode> {
        self.target
            .root_attribute(&self.config.attribute)
            .and_then(|raw| raw.parse().ok())
    }

    /// Renders the resolved mode onto the root attribute and refreshes the icon.
    ///
    /// Calling this repeatedly without a mode change yields the same attribute
    /// as long as the system preference is unchanged.
    pub fn apply(&mut self) -> Result<ColorMode, ThemeError> {
        let concrete = self.resolve();
        self.target
            .set_root_attribute(&self.config.attribute, concrete.as_str());
        tracing::debug!(
            mode = %self.mode,
            %concrete,
            attribute = %self.config.attribute,
            "rendered theme"
        );
        if self.config.cycle == Cycle::TriState {
            self.update_icon()?;
        }
        Ok(concrete)
    }

    /// Advances to the next mode of the configured cycle, persists it and re-renders.
    ///
    /// The binary cycle flips whatever is currently rendered rather than the
    /// in-memory mode, so it stays in step with the page even when something
    /// else rewrote the attribute.
    pub fn toggle(&mut self) -> Result<ThemeMode, ThemeError> {
        let next = match self.config.cycle {
            Cycle::TriState => self.mode.next(),
            Cycle::Binary => {
                let current = self.rendered().unwrap_or(ColorMode::Light);
                ThemeMode::from(current.flipped())
            }
        };
        self.commit(next)?;
        Ok(next)
    }

    /// Selects `mode` explicitly, persisting and rendering it.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnsupportedMode`] for `auto` under the binary cycle.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        if self.config.cycle == Cycle::Binary && mode == ThemeMode::Auto {
            return Err(ThemeError::UnsupportedMode(mode));
        }
        self.commit(mode)
    }

    fn commit(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.store.set(&self.config.storage_key, mode.as_str())?;
        if mode != self.mode {
            tracing::info!(from = %self.mode, to = %mode, "theme mode changed");
        }
        self.mode = mode;
        self.apply()?;
        Ok(())
    }

    fn update_icon(&mut self) -> Result<(), ThemeError> {
        let icons = &self.config.icon;
        let mode = self.mode;
        let Some(list) = self.target.icon_mut(&icons.selector) else {
            return Err(ThemeError::IconNotFound {
                selector: icons.selector.clone(),
            });
        };
        for candidate in ThemeMode::ALL {
            list.toggle(icons.class_for(candidate), candidate == mode);
        }
        Ok(())
    }

    /// Renders the toggle button markup for the current mode.
    pub fn render_button(&self) -> Result<String, ThemeError> {
        Ok(crate::markup::render_toggle_button(&self.config, self.mode)?)
    }

    /// Consumes the controller, returning the presentation target.
    pub fn into_target(self) -> P {
        self.target
    }
}

fn parse_stored(raw: &str, cycle: Cycle) -> Option<ThemeMode> {
    match raw.parse::<ThemeMode>() {
        Ok(ThemeMode::Auto) if cycle == Cycle::Binary => None,
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!(%err, "ignoring stored theme preference");
            None
        }
    }
}

fn initial_mode<D: SystemPreference>(cycle: Cycle, system: &D) -> ThemeMode {
    match cycle {
        Cycle::TriState => ThemeMode::Auto,
        Cycle::Binary => ThemeMode::from(system.color_mode()),
    }
}
