//! Click-handler surface.
//!
//! A page wires one argument-less callback to its toggle button. The
//! controller state is not global: the [`ToggleHandler`] owns it and every
//! callback it hands out captures a shared reference. Everything runs on a
//! single UI thread, so `Rc<RefCell<_>>` is all the sharing needed.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::controller::ThemeController;
use crate::document::Presentation;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::store::PreferenceStore;
use crate::system::SystemPreference;

/// Shared handle to a controller, dispatching user clicks to it.
pub struct ToggleHandler<S, D, P> {
    controller: Rc<RefCell<ThemeController<S, D, P>>>,
}

impl<S, D, P> Clone for ToggleHandler<S, D, P> {
    fn clone(&self) -> Self {
        Self {
            controller: Rc::clone(&self.controller),
        }
    }
}

impl<S, D, P> ToggleHandler<S, D, P>
where
    S: PreferenceStore + 'static,
    D: SystemPreference + 'static,
    P: Presentation + 'static,
{
    pub fn new(controller: ThemeController<S, D, P>) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
        }
    }

    /// Runs one toggle and returns its outcome.
    pub fn click(&self) -> Result<ThemeMode, ThemeError> {
        self.controller.borrow_mut().toggle()
    }

    /// Returns a callback suitable for a button's click event.
    ///
    /// A failure only ends the current click: it is logged and the next
    /// invocation runs normally.
    ///
    /// ```rust
    /// use themeswitch::{
    ///     ColorMode, ControllerConfig, Document, MemoryStore, ThemeController, ToggleHandler,
    /// };
    ///
    /// let store = MemoryStore::new();
    /// let doc = Document::new().with_icon("#theme-toggle i", "bi");
    /// let config = ControllerConfig::default();
    /// let controller = ThemeController::load(store.clone(), ColorMode::Light, doc, config).unwrap();
    /// let handler = ToggleHandler::new(controller);
    ///
    /// let mut on_click = handler.callback();
    /// on_click();
    /// on_click();
    /// assert_eq!(store.value("theme").as_deref(), Some("light"));
    /// ```
    pub fn callback(&self) -> impl FnMut() + 'static {
        let handler = self.clone();
        move || {
            if let Err(err) = handler.click() {
                tracing::error!(%err, "theme toggle failed");
            }
        }
    }

    /// Borrows the controller for inspection.
    pub fn controller(&self) -> Ref<'_, ThemeController<S, D, P>> {
        self.controller.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::document::Document;
    use crate::mode::ColorMode;
    use crate::store::MemoryStore;

    #[test]
    fn test_click_cycles_shared_state() {
        let store = MemoryStore::new();
        let doc = Document::new().with_icon("#theme-toggle i", "bi");
        let controller = ThemeController::load(
            store.clone(),
            ColorMode::Dark,
            doc,
            ControllerConfig::default(),
        )
        .unwrap();
        let handler = ToggleHandler::new(controller);
        let other = handler.clone();

        assert_eq!(handler.click().unwrap(), ThemeMode::Dark);
        assert_eq!(other.click().unwrap(), ThemeMode::Light);
        assert_eq!(handler.controller().mode(), ThemeMode::Light);
    }

    #[test]
    fn test_callback_survives_faults() {
        let store = MemoryStore::new();
        let controller = ThemeController::load(
            store.clone(),
            ColorMode::Dark,
            Document::new(),
            ControllerConfig::default(),
        )
        .unwrap();
        let handler = ToggleHandler::new(controller);

        let mut on_click = handler.callback();
        on_click();
        on_click();

        // Each click persisted before the missing icon ended it.
        assert_eq!(store.value("theme").as_deref(), Some("light"));
        assert_eq!(handler.controller().mode(), ThemeMode::Light);
        assert_eq!(handler.controller().rendered(), Some(ColorMode::Light));
    }
}
