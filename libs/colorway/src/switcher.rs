//! Runtime theme switching and the current-theme readers

use crate::dom::{check_class_token, Dom, THEME_ATTRIBUTE};
use crate::error::Result;
use crate::theme::ThemeSet;
use tracing::{debug, warn};

/// Switches the root element between the themes of one theme set and
/// persists the choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSwitcher {
    theme_names: Vec<String>,
    storage_key: String,
}

impl ThemeSwitcher {
    pub fn new(themes: &ThemeSet, storage_key: impl Into<String>) -> Self {
        Self {
            theme_names: themes.names().map(str::to_string).collect(),
            storage_key: storage_key.into(),
        }
    }

    /// Names whose classes are cleared on every switch
    pub fn theme_names(&self) -> &[String] {
        &self.theme_names
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Make `theme_name` the active theme.
    ///
    /// Removes every known theme class from the root, adds `theme_name` (the
    /// default theme included) and persists it. Unknown names are applied
    /// and persisted as given. A name that is not a single class token
    /// (empty, or containing whitespace) is an error and leaves the page
    /// untouched.
    pub fn switch_to<D: Dom + ?Sized>(&self, dom: &mut D, theme_name: &str) -> Result<()> {
        check_class_token(theme_name)?;
        if !self.theme_names.iter().any(|name| name == theme_name) {
            warn!("Switching to unknown theme {theme_name}");
        }

        for name in &self.theme_names {
            dom.remove_root_class(name)?;
        }
        dom.add_root_class(theme_name)?;
        dom.set_root_attribute(THEME_ATTRIBUTE, theme_name)?;
        dom.write_preference(&self.storage_key, theme_name)?;

        debug!("Switched theme to {theme_name}");
        Ok(())
    }
}

/// Creates a switcher over the themes of `themes`
pub fn create_change_theme_fn(themes: &ThemeSet, storage_key: &str) -> ThemeSwitcher {
    ThemeSwitcher::new(themes, storage_key)
}

/// The root element's class attribute, or `fallback` without a document.
///
/// When the root carries only the theme class this is the active theme
/// name; other root classes are returned alongside it.
pub fn current_theme_name<D: Dom + ?Sized>(dom: Option<&D>, fallback: &str) -> String {
    match dom {
        Some(dom) => dom.root_class_name(),
        None => fallback.to_string(),
    }
}

/// Active theme as recorded in the root `data-theme` attribute
pub fn active_theme<D: Dom + ?Sized>(dom: &D) -> Option<String> {
    dom.root_attribute(THEME_ATTRIBUTE)
}
