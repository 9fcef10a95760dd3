//! CSS rule generation
//!
//! The default theme is written once as a rule on `html`, so pages render
//! with it before any script runs (or when scripting is off). Each other
//! theme becomes a class rule that overrides only the properties it
//! defines; everything else cascades from the `html` rule.

use crate::error::{ColorwayError, Result};
use crate::theme::{Theme, ThemeSet};
use crate::vars::css_var_name;

/// Selector of the fallback rule
pub const FALLBACK_SELECTOR: &str = "html";

/// Serialize a theme's tokens as one rule scoped to `selector`
pub fn theme_rule(selector: &str, theme: &Theme) -> String {
    let mut rule = format!("{selector}{{");

    for (category, key, value) in theme.tokens() {
        rule.push_str(&css_var_name(category, key));
        rule.push(':');
        rule.push_str(&value.to_string());
        rule.push(';');
    }

    rule.push('}');
    rule
}

/// Creates the fallback rule declaring every default-theme variable on the
/// root element, e.g. `html{--colors-bg:white;}`.
///
/// A missing or empty default theme yields `html{}`.
pub fn create_fallback_style_string(themes: &ThemeSet, default_theme: &str) -> String {
    match themes.get(default_theme) {
        Some(theme) => theme_rule(FALLBACK_SELECTOR, theme),
        None => format!("{FALLBACK_SELECTOR}{{}}"),
    }
}

/// Accepts one `selector{declarations}` rule: a non-empty selector and
/// braces balanced outside of quoted strings, the last brace closing the rule.
///
/// Token values are emitted verbatim, so `"}"` or `'{'` inside a value is
/// legal CSS and must not count toward nesting.
pub fn check_rule(rule: &str) -> Result<()> {
    let invalid = || ColorwayError::InvalidRule(rule.to_string());
    let rule = rule.trim();

    let open = rule.find('{').ok_or_else(invalid)?;
    if rule[..open].trim().is_empty() || !rule.ends_with('}') {
        return Err(invalid());
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in rule.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(invalid)?;
                if depth == 0 && i != rule.len() - 1 {
                    return Err(invalid());
                }
            }
            _ => {}
        }
    }

    if depth == 0 && quote.is_none() {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Creates one `.<name>{...}` rule per non-default theme, in theme set order.
///
/// Tokens absent from the default theme are emitted as they are; rejecting
/// them is the job of [`crate::ColorwayConfig::validate`].
pub fn create_theme_class_rules(themes: &ThemeSet, default_theme: &str) -> Vec<String> {
    themes
        .additional(default_theme)
        .map(|(name, theme)| theme_rule(&format!(".{name}"), theme))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn themes() -> ThemeSet {
        ThemeSet::new()
            .with(
                "light",
                Theme::new()
                    .with("colors", "text", "black")
                    .with("colors", "bg", "white")
                    .with("space", "gutter", "1rem"),
            )
            .with("dark", Theme::new().with("colors", "text", "white").with("colors", "bg", "black"))
            .with("roomy", Theme::new().with("space", "gutter", "2rem"))
    }

    #[test]
    fn test_minimal_pair() {
        let set = ThemeSet::new()
            .with("default", Theme::new().with("a", "x", 1))
            .with("dark", Theme::new().with("a", "x", 2));

        assert_eq!(create_fallback_style_string(&set, "default"), "html{--a-x:1;}");
        assert_eq!(create_theme_class_rules(&set, "default"), vec![".dark{--a-x:2;}"]);
    }

    #[test]
    fn test_fallback_lists_default_in_order() {
        assert_eq!(
            create_fallback_style_string(&themes(), "light"),
            "html{--colors-text:black;--colors-bg:white;--space-gutter:1rem;}"
        );
    }

    #[test]
    fn test_fallback_for_empty_or_missing_default() {
        let set = ThemeSet::new().with("light", Theme::new());
        assert_eq!(create_fallback_style_string(&set, "light"), "html{}");
        assert_eq!(create_fallback_style_string(&set, "nope"), "html{}");
    }

    #[test]
    fn test_class_rules_are_sparse() {
        assert_eq!(
            create_theme_class_rules(&themes(), "light"),
            vec![
                ".dark{--colors-text:white;--colors-bg:black;}",
                ".roomy{--space-gutter:2rem;}",
            ]
        );
    }

    #[test]
    fn test_default_choice_changes_rules() {
        let rules = create_theme_class_rules(&themes(), "dark");
        assert_eq!(rules.len(), 2);
        assert!(rules[0].starts_with(".light{"));
        assert!(rules[1].starts_with(".roomy{"));
    }

    #[test]
    fn test_orphan_tokens_do_not_break_generation() {
        let set = themes().with("neon", Theme::new().with("glow", "strength", 3));
        let rules = create_theme_class_rules(&set, "light");
        assert_eq!(rules.last().unwrap(), ".neon{--glow-strength:3;}");
    }

    #[test]
    fn test_rule_shape_checked() {
        assert!(check_rule("html{--a-x:1;}").is_ok());
        assert!(check_rule("html{}").is_ok());
        assert!(check_rule(".dark{--a:b;}").is_ok());
        assert!(check_rule("{--a:b;}").is_err());
        assert!(check_rule("html{--a:b;").is_err());
        assert!(check_rule("html--a:b;}").is_err());
        assert!(check_rule("a{}b{}").is_err());
        assert!(check_rule("a{}}").is_err());
    }

    #[test]
    fn test_rule_check_skips_quoted_braces() {
        assert!(check_rule(r#"html{--content-open:"}";}"#).is_ok());
        assert!(check_rule("html{--content-open:'{';}").is_ok());
        assert!(check_rule(r#"html{--content-q:"\"}";}"#).is_ok());
        assert!(check_rule(r"html{--content-b:\};}").is_ok());
        assert!(check_rule(r#"html{--content-open:"};}"#).is_err());
    }

    #[test]
    fn test_generated_rules_with_quoted_braces_pass_check() {
        let set = ThemeSet::new()
            .with("light", Theme::new().with("content", "open", "\"}\""))
            .with("dark", Theme::new().with("content", "open", "'{'"));

        let fallback = create_fallback_style_string(&set, "light");
        assert_eq!(fallback, r#"html{--content-open:"}";}"#);
        assert!(check_rule(&fallback).is_ok());
        for rule in create_theme_class_rules(&set, "light") {
            assert!(check_rule(&rule).is_ok());
        }
    }

    #[test]
    fn test_integral_float_values_drop_fraction() {
        let set = ThemeSet::new().with("light", Theme::new().with("space", "a", 1.0).with("space", "b", 0.5));
        assert_eq!(create_fallback_style_string(&set, "light"), "html{--space-a:1;--space-b:0.5;}");
    }

    #[test]
    fn test_single_theme_has_no_class_rules() {
        let set = ThemeSet::new().with("light", Theme::new().with("a", "x", 1));
        assert!(create_theme_class_rules(&set, "light").is_empty());
    }
}
