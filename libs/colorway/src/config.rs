//! Colorway configuration
//!
//! A config names the themes, the default theme and the storage key the
//! active theme is persisted under. It can be built in code or loaded from a
//! TOML, YAML or JSON file:
//!
//! ```toml
//! default_theme = "light"
//! storage_key = "my-theme"
//!
//! [themes.light.colors]
//! text = "black"
//! bg = "white"
//!
//! [themes.dark.colors]
//! text = "white"
//! bg = "black"
//! ```

use crate::error::{ColorwayError, Result};
use crate::theme::ThemeSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Storage key used when a config does not name one
pub const DEFAULT_STORAGE_KEY: &str = "colorway-theme";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Owned theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorwayConfig {
    /// Theme rendered by the fallback rule
    pub default_theme: String,
    /// Key the active theme name is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// All themes, default included
    pub themes: ThemeSet,
}

/// Borrowed view of a config, taken by the generators and the injector
#[derive(Debug, Clone, Copy)]
pub struct ColorwayArgs<'a> {
    pub themes: &'a ThemeSet,
    pub default_theme: &'a str,
    pub storage_key: &'a str,
}

impl<'a> ColorwayArgs<'a> {
    pub fn new(themes: &'a ThemeSet, default_theme: &'a str, storage_key: &'a str) -> Self {
        Self {
            themes,
            default_theme,
            storage_key,
        }
    }
}

impl ColorwayConfig {
    /// Create a config with the default storage key
    pub fn new(themes: ThemeSet, default_theme: impl Into<String>) -> Self {
        Self {
            default_theme: default_theme.into(),
            storage_key: default_storage_key(),
            themes,
        }
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Borrow as generator arguments
    pub fn args(&self) -> ColorwayArgs<'_> {
        ColorwayArgs::new(&self.themes, &self.default_theme, &self.storage_key)
    }

    /// Load and validate a config file; the format follows the extension
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            other => return Err(ColorwayError::UnsupportedFormat(other.to_string())),
        };

        config.validate()?;
        debug!(
            "Loaded {} theme(s) from {}, default {}",
            config.themes.len(),
            path.display(),
            config.default_theme
        );
        Ok(config)
    }

    /// Parse a TOML config without validating it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check that the theme set can be rendered consistently.
    ///
    /// Rejects empty sets, a default theme that is not in the set, theme
    /// names unusable as CSS classes, empty category/token names, and tokens
    /// of additional themes that the default theme does not define.
    pub fn validate(&self) -> Result<()> {
        if self.themes.is_empty() {
            return Err(ColorwayError::EmptyThemeSet);
        }

        let default = self
            .themes
            .get(&self.default_theme)
            .ok_or_else(|| ColorwayError::MissingDefaultTheme(self.default_theme.clone()))?;

        for (name, theme) in self.themes.iter() {
            if !is_class_name(name) {
                return Err(ColorwayError::InvalidThemeName(name.to_string()));
            }

            for (category, key, _) in theme.tokens() {
                for part in [category, key] {
                    if !is_token_name(part) {
                        return Err(ColorwayError::InvalidTokenName {
                            theme: name.to_string(),
                            name: part.to_string(),
                        });
                    }
                }

                if !default.contains(category, key) {
                    return Err(ColorwayError::OrphanToken {
                        theme: name.to_string(),
                        category: category.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Plain class identifier: `[A-Za-z_-][A-Za-z0-9_-]*`, not starting `--` or `-<digit>`
fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    if first == '-' {
        match name.chars().nth(1) {
            None => return false,
            Some(second) if second == '-' || second.is_ascii_digit() => return false,
            Some(_) => {}
        }
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Category and token names end up inside a custom property name
fn is_token_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
