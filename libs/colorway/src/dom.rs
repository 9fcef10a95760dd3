//! Document abstraction
//!
//! [`Dom`] is the whole side-effect surface Colorway needs from a page:
//! appending `<style>`/`<script>` elements to the head, inserting rules into
//! a style element's sheet, the root element's class list and attributes,
//! and one persisted key/value store. [`crate::MemoryDocument`] implements
//! it headlessly; on wasm32, `web::BrowserDom` implements it over `web-sys`.

use crate::error::{ColorwayError, Result};
use crate::script::Bootstrap;

/// Identifier of the style element injected with the default theme rule
pub const FALLBACK_STYLE_ID: &str = "__cssVarsFallback";

/// Identifier of the injected bootstrap script
pub const INJECTOR_SCRIPT_ID: &str = "__cssVarsInjector";

/// Identifier of the style element holding the class rules
pub const THEMES_STYLE_ID: &str = "__cssVarThemes";

/// Root attribute mirroring the active theme name
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root classes are single non-empty tokens without whitespace
pub fn check_class_token(class: &str) -> Result<()> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(ColorwayError::Dom(format!("invalid class token {class:?}")));
    }
    Ok(())
}

/// A style element appended by [`Dom::append_style`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleHandle(pub usize);

/// Page operations used by the injector, the switcher and the reader
pub trait Dom {
    /// Append an empty `<style id=..>` to the head
    fn append_style(&mut self, id: &str) -> Result<StyleHandle>;

    /// Insert a rule at the end of the style element's sheet
    fn insert_rule(&mut self, style: StyleHandle, rule: &str) -> Result<()>;

    /// Append a `<script id=..>` running `bootstrap` to the head.
    ///
    /// Hosts that execute scripts run it as part of appending; hosts that do
    /// not must apply it themselves.
    fn append_script(&mut self, id: &str, bootstrap: &Bootstrap) -> Result<()>;

    /// Add a class to the root element; adding a present class is a no-op
    fn add_root_class(&mut self, class: &str) -> Result<()>;

    /// Remove a class from the root element; removing an absent class is a no-op
    fn remove_root_class(&mut self, class: &str) -> Result<()>;

    /// The root element's class attribute, classes joined by spaces
    fn root_class_name(&self) -> String;

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Read a persisted value; unavailable storage reads as absent
    fn read_preference(&self, key: &str) -> Option<String>;

    /// Persist a value, replacing any previous one
    fn write_preference(&mut self, key: &str, value: &str) -> Result<()>;
}
