//! CSS custom-property naming and theme conversion
//!
//! Every `(category, key)` pair maps to the custom property
//! `--<category>-<key>`. That name is the only link between the fallback
//! rule, the class rules and the converted theme handed to application code.

use crate::theme::{Theme, TokenValue};

/// Custom property name for a token: `--<category>-<key>`
pub fn css_var_name(category: &str, key: &str) -> String {
    format!("--{category}-{key}")
}

/// Reference to a token's custom property: `var(--<category>-<key>)`
pub fn css_var_ref(category: &str, key: &str) -> String {
    format!("var(--{category}-{key})")
}

/// Converts a theme so its values read the CSS variables instead of the raw
/// tokens.
///
/// The result has the same categories and keys as `theme`; every leaf is
/// replaced by [`css_var_ref`]. The input is left untouched.
pub fn convert_theme_to_css_vars(theme: &Theme) -> Theme {
    let mut converted = theme.clone();

    for (category, scale) in converted.categories_mut() {
        for (key, value) in scale.iter_mut() {
            *value = TokenValue::Text(css_var_ref(category, key));
        }
    }

    converted
}
