//! Error types for Colorway operations

use thiserror::Error;

/// Colorway error types
#[derive(Debug, Error)]
pub enum ColorwayError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (TOML, YAML, JSON)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config file extension is not one we know how to read
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Theme set has no themes at all
    #[error("Theme set is empty")]
    EmptyThemeSet,

    /// Designated default theme is not part of the theme set
    #[error("Default theme not found: {0}")]
    MissingDefaultTheme(String),

    /// Theme name cannot be used as a CSS class
    #[error("Invalid theme name: {0:?}")]
    InvalidThemeName(String),

    /// Category or token name cannot be used in a custom property name
    #[error("Invalid token name in theme {theme}: {name:?}")]
    InvalidTokenName { theme: String, name: String },

    /// Additional theme defines a token the default theme does not
    #[error("Theme {theme} defines --{category}-{key}, which is absent from the default theme")]
    OrphanToken {
        theme: String,
        category: String,
        key: String,
    },

    /// Stylesheet rejected a rule
    #[error("Invalid CSS rule: {0}")]
    InvalidRule(String),

    /// Document or storage operation failed
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type for Colorway operations
pub type Result<T> = std::result::Result<T, ColorwayError>;

impl ColorwayError {
    /// Check if this error comes from the configuration rather than the host
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::UnsupportedFormat(_)
                | Self::EmptyThemeSet
                | Self::MissingDefaultTheme(_)
                | Self::InvalidThemeName(_)
                | Self::InvalidTokenName { .. }
                | Self::OrphanToken { .. }
        )
    }
}

impl From<serde_json::Error> for ColorwayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ColorwayError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ColorwayError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
