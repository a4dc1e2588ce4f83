//! Markup for the toggle button and the pre-rendered root attribute.
//!
//! Server-side pages use this to emit the button the click handler is wired
//! to, with the icon already matching the stored mode, and to stamp the root
//! element with the resolved mode so the first paint is correct.

use minijinja::Environment;
use serde::Serialize;

use crate::config::ControllerConfig;
use crate::mode::{ColorMode, ThemeMode};

const TOGGLE_BUTTON: &str = "toggle_button.html";
const ROOT_ATTRIBUTE: &str = "root_attribute.html";

const TOGGLE_BUTTON_SOURCE: &str = concat!(
    r#"<button id="{{ button_id }}" type="button" class="btn btn-link" onclick="toggleTheme()""#,
    r#" aria-label="Toggle theme (current: {{ mode }})">"#,
    r#"<i class="bi {{ icon }}"></i></button>"#,
);
const ROOT_ATTRIBUTE_SOURCE: &str = r#"{{ attribute }}="{{ value }}""#;

#[derive(Serialize)]
struct ButtonContext<'a> {
    button_id: &'a str,
    mode: &'a str,
    icon: &'a str,
}

#[derive(Serialize)]
struct AttributeContext<'a> {
    attribute: &'a str,
    value: &'a str,
}

/// Templates compiled once, rendered per request.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ColorMode, ControllerConfig, MarkupRenderer, ThemeMode};
///
/// let renderer = MarkupRenderer::new(ControllerConfig::default()).unwrap();
/// let button = renderer.toggle_button(ThemeMode::Light).unwrap();
/// assert!(button.contains(r#"<i class="bi bi-sun"></i>"#));
///
/// let attr = renderer.root_attribute(ColorMode::Dark).unwrap();
/// assert_eq!(attr, r#"data-bs-theme="dark""#);
/// ```
pub struct MarkupRenderer {
    env: Environment<'static>,
    config: ControllerConfig,
}

impl MarkupRenderer {
    pub fn new(config: ControllerConfig) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TOGGLE_BUTTON, TOGGLE_BUTTON_SOURCE)?;
        env.add_template(ROOT_ATTRIBUTE, ROOT_ATTRIBUTE_SOURCE)?;
        Ok(Self { env, config })
    }

    /// Renders the toggle button showing the icon for `mode`.
    pub fn toggle_button(&self, mode: ThemeMode) -> Result<String, minijinja::Error> {
        let ctx = ButtonContext {
            button_id: button_id(&self.config.icon.selector),
            mode: mode.as_str(),
            icon: self.config.icon.class_for(mode),
        };
        self.env.get_template(TOGGLE_BUTTON)?.render(ctx)
    }

    /// Renders `name="value"` for the root element.
    pub fn root_attribute(&self, mode: ColorMode) -> Result<String, minijinja::Error> {
        let ctx = AttributeContext {
            attribute: &self.config.attribute,
            value: mode.as_str(),
        };
        self.env.get_template(ROOT_ATTRIBUTE)?.render(ctx)
    }
}

/// Convenience wrapper for a one-off button render.
pub fn render_toggle_button(
    config: &ControllerConfig,
    mode: ThemeMode,
) -> Result<String, minijinja::Error> {
    MarkupRenderer::new(config.clone())?.toggle_button(mode)
}

/// Convenience wrapper for a one-off root attribute render.
pub fn render_root_attribute(
    config: &ControllerConfig,
    mode: ColorMode,
) -> Result<String, minijinja::Error> {
    MarkupRenderer::new(config.clone())?.root_attribute(mode)
}

/// Extracts the button id from an icon selector like `#theme-toggle i`.
fn button_id(selector: &str) -> &str {
    selector
        .split_whitespace()
        .next()
        .and_then(|first| first.strip_prefix('#'))
        .filter(|id| !id.is_empty())
        .unwrap_or("theme-toggle")
}
