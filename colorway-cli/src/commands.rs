//! Command output rendering

use anyhow::{anyhow, Result};
use colorway::{
    convert_theme_to_css_vars, create_fallback_style_string, create_injectable_script,
    create_theme_class_rules, css_vars_head, ColorwayConfig,
};

pub fn head(config: &ColorwayConfig) -> String {
    css_vars_head(&config.args()).to_html()
}

pub fn fallback(config: &ColorwayConfig) -> String {
    create_fallback_style_string(&config.themes, &config.default_theme)
}

pub fn rules(config: &ColorwayConfig) -> String {
    create_theme_class_rules(&config.themes, &config.default_theme).join("\n")
}

pub fn script(config: &ColorwayConfig) -> String {
    create_injectable_script(&config.args())
}

/// Converted theme as pretty JSON
pub fn vars(config: &ColorwayConfig, theme: Option<&str>) -> Result<String> {
    let name = theme.unwrap_or(&config.default_theme);
    let theme = config
        .themes
        .get(name)
        .ok_or_else(|| anyhow!("Theme not found: {name}"))?;

    Ok(serde_json::to_string_pretty(&convert_theme_to_css_vars(theme))?)
}

pub fn check(config: &ColorwayConfig) -> String {
    let mut lines = vec![format!(
        "OK: {} theme(s), default {}, storage key {}",
        config.themes.len(),
        config.default_theme,
        config.storage_key
    )];

    for (name, theme) in config.themes.iter() {
        let marker = if name == config.default_theme { " (default)" } else { "" };
        lines.push(format!("  {name}{marker}: {} token(s)", theme.token_count()));
    }

    lines.join("\n")
}
