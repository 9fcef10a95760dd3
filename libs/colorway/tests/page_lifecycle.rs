//! Page lifecycle tests
//!
//! Drive a full load -> switch -> reload cycle against the in-memory
//! document and check the three artifacts stay consistent.

use colorway::dom::{FALLBACK_STYLE_ID, INJECTOR_SCRIPT_ID, THEMES_STYLE_ID, THEME_ATTRIBUTE};
use colorway::{
    active_theme, convert_theme_to_css_vars, create_change_theme_fn, css_vars_head,
    current_theme_name, inject_css_vars, ColorwayConfig, Dom, MemoryDocument, Theme, ThemeSet,
    TokenValue,
};
use pretty_assertions::assert_eq;

const CONFIG: &str = r##"
default_theme = "lightTheme"
storage_key = "myTheme"

[themes.lightTheme.colors]
text = "black"
bg = "white"
buttonBg = "black"
buttonColor = "white"

[themes.darkTheme.colors]
text = "white"
bg = "black"
buttonBg = "white"
buttonColor = "black"

[themes.contrast.colors]
text = "#000"
"##;

fn config() -> ColorwayConfig {
    let config = ColorwayConfig::from_toml_str(CONFIG).unwrap();
    config.validate().unwrap();
    config
}

#[test]
fn first_visit_renders_default() {
    let config = config();
    let mut doc = MemoryDocument::new();

    inject_css_vars(&mut doc, &config.args()).unwrap();

    assert_eq!(
        doc.element(FALLBACK_STYLE_ID).unwrap().rules,
        vec!["html{--colors-text:black;--colors-bg:white;--colors-buttonBg:black;--colors-buttonColor:white;}"]
    );
    assert_eq!(
        doc.element(THEMES_STYLE_ID).unwrap().rules,
        vec![
            ".darkTheme{--colors-text:white;--colors-bg:black;--colors-buttonBg:white;--colors-buttonColor:black;}",
            ".contrast{--colors-text:#000;}",
        ]
    );
    assert_eq!(current_theme_name(Some(&doc), &config.default_theme), "");
    assert_eq!(active_theme(&doc).as_deref(), Some("lightTheme"));
}

#[test]
fn switch_then_reload_restores_choice() {
    let config = config();
    let switcher = create_change_theme_fn(&config.themes, &config.storage_key);

    let mut doc = MemoryDocument::new();
    inject_css_vars(&mut doc, &config.args()).unwrap();
    switcher.switch_to(&mut doc, "darkTheme").unwrap();
    assert_eq!(doc.root_class_name(), "darkTheme");

    let mut reloaded = doc.reload();
    inject_css_vars(&mut reloaded, &config.args()).unwrap();

    assert_eq!(reloaded.root_class_name(), "darkTheme");
    assert_eq!(active_theme(&reloaded).as_deref(), Some("darkTheme"));
    assert_eq!(reloaded.read_preference("myTheme").as_deref(), Some("darkTheme"));
}

#[test]
fn toggling_like_an_app_button() {
    let config = config();
    let switcher = create_change_theme_fn(&config.themes, &config.storage_key);
    let mut doc = MemoryDocument::new();
    inject_css_vars(&mut doc, &config.args()).unwrap();

    for expected in ["darkTheme", "lightTheme", "darkTheme"] {
        let current = current_theme_name(Some(&doc), &config.default_theme);
        let next = if current == "darkTheme" { "lightTheme" } else { "darkTheme" };
        switcher.switch_to(&mut doc, next).unwrap();
        assert_eq!(doc.root_class_name(), expected);
    }
}

#[test]
fn server_render_without_document() {
    let config = config();
    let head = css_vars_head(&config.args());

    assert_eq!(
        current_theme_name::<MemoryDocument>(None, &config.default_theme),
        "lightTheme"
    );
    let html = head.to_html();
    assert!(html.starts_with(&format!("<style id=\"{FALLBACK_STYLE_ID}\">html{{--colors-text:black;")));
    assert!(html.contains(&format!("<script id=\"{INJECTOR_SCRIPT_ID}\">")));
    assert!(html.contains(r#"storageKey="myTheme""#));
}

#[test]
fn converted_theme_references_injected_variables() {
    let config = config();
    let default = config.themes.get(&config.default_theme).unwrap();
    let vars = convert_theme_to_css_vars(default);
    let fallback = colorway::create_fallback_style_string(&config.themes, &config.default_theme);

    for (category, key, value) in vars.tokens() {
        let name = format!("--{category}-{key}");
        assert_eq!(value, &TokenValue::Text(format!("var({name})")));
        assert!(fallback.contains(&format!("{name}:")));
    }
}

#[test]
fn orphan_tokens_render_but_fail_validation() {
    let themes = ThemeSet::new()
        .with("light", Theme::new().with("colors", "bg", "white"))
        .with("neon", Theme::new().with("glow", "size", 4));
    let config = ColorwayConfig::new(themes, "light");

    let mut doc = MemoryDocument::new();
    inject_css_vars(&mut doc, &config.args()).unwrap();
    assert_eq!(
        doc.element(THEMES_STYLE_ID).unwrap().rules,
        vec![".neon{--glow-size:4;}"]
    );

    assert!(config.validate().is_err());
}

#[test]
fn double_injection_is_tolerated() {
    let config = config();
    let mut doc = MemoryDocument::new();

    inject_css_vars(&mut doc, &config.args()).unwrap();
    inject_css_vars(&mut doc, &config.args()).unwrap();

    assert_eq!(doc.elements(FALLBACK_STYLE_ID).count(), 2);
    assert_eq!(doc.elements(INJECTOR_SCRIPT_ID).count(), 2);
    assert_eq!(doc.root_attribute(THEME_ATTRIBUTE).as_deref(), Some("lightTheme"));
}
