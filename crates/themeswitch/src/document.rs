//! Presentation targets.
//!
//! The controller writes the resolved mode to a root attribute and, for the
//! tri-state cycle, flips classes on an icon element. Both go through a
//! [`Presentation`] handle supplied at construction. [`Document`] is the
//! in-memory implementation used by tests and by the CLI.

use std::collections::BTreeMap;

/// Handle to the element tree the theme is rendered onto.
pub trait Presentation {
    /// Sets an attribute on the document root.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Reads an attribute from the document root.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Locates the toggle icon's class list, if the element exists.
    fn icon_mut(&mut self, selector: &str) -> Option<&mut ClassList>;
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn icon_mut(&mut self, selector: &str) -> Option<&mut ClassList> {
        (**self).icon_mut(selector)
    }
}

/// A set of CSS classes with DOM `classList` semantics.
///
/// Classes keep insertion order and appear at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-separated `class` attribute.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_whitespace() {
            list.add(class);
        }
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds `class` when `force` is true and removes it otherwise.
    pub fn toggle(&mut self, class: &str, force: bool) {
        if force {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(" "))
    }
}

/// In-memory document: root attributes plus icon elements keyed by selector.
///
/// # Example
///
/// ```rust
/// use themeswitch::{Document, Presentation};
///
/// let mut doc = Document::new().with_icon("#theme-toggle i", "bi");
/// doc.set_root_attribute("data-bs-theme", "dark");
/// assert_eq!(doc.root_attribute("data-bs-theme").as_deref(), Some("dark"));
/// assert!(doc.icon("#theme-toggle i").unwrap().contains("bi"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: BTreeMap<String, String>,
    icons: BTreeMap<String, ClassList>,
}

impl Document {
    /// Creates a document with no attributes and no icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an icon element reachable through `selector` with initial classes.
    pub fn with_icon(mut self, selector: &str, classes: &str) -> Self {
        let list = ClassList::parse(classes);
        self.icons.insert(selector.to_string(), list);
        self
    }

    pub fn icon(&self, selector: &str) -> Option<&ClassList> {
        self.icons.get(selector)
    }

    /// All root attributes, sorted by name.
    pub fn root_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.root.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Presentation for Document {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn icon_mut(&mut self, selector: &str) -> Option<&mut ClassList> {
        self.icons.get_mut(selector)
    }
}
