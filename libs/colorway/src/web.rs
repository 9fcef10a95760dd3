//! Browser backend (wasm32)
//!
//! [`BrowserDom`] implements [`Dom`] over `web-sys`: the page's `document`,
//! its `<head>`, `document.documentElement` and `window.localStorage`. The
//! functions at the bottom are exported to JavaScript with `wasm-bindgen`
//! and take the config as a JSON string.

use crate::config::ColorwayConfig;
use crate::dom::{Dom, StyleHandle};
use crate::error::{ColorwayError, Result};
use crate::inject::inject_css_vars;
use crate::script::Bootstrap;
use crate::switcher::ThemeSwitcher;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleSheet, Document, Element, HtmlElement, HtmlStyleElement, Storage};

fn js_error(value: JsValue) -> ColorwayError {
    ColorwayError::Dom(format!("{value:?}"))
}

/// The current page, seen through [`Dom`]
pub struct BrowserDom {
    document: Document,
    head: HtmlElement,
    root: Element,
    storage: Option<Storage>,
    styles: Vec<HtmlStyleElement>,
}

impl BrowserDom {
    /// Attach to `window.document`; `None` outside a browser context
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let head: HtmlElement = document.head()?.into();
        let root = document.document_element()?;
        // localStorage throws when storage is disabled
        let storage = window.local_storage().ok().flatten();

        Some(Self {
            document,
            head,
            root,
            storage,
            styles: Vec::new(),
        })
    }

    /// Like [`BrowserDom::detect`], but an error outside a browser context
    pub fn new() -> Result<Self> {
        Self::detect().ok_or_else(|| ColorwayError::Dom("no document available".into()))
    }

    fn create_element(&self, tag: &str, id: &str) -> Result<Element> {
        let element = self.document.create_element(tag).map_err(js_error)?;
        element.set_id(id);
        Ok(element)
    }
}

impl Dom for BrowserDom {
    fn append_style(&mut self, id: &str) -> Result<StyleHandle> {
        let style = self
            .create_element("style", id)?
            .dyn_into::<HtmlStyleElement>()
            .map_err(|_| ColorwayError::Dom("created element is not a <style>".into()))?;
        self.head.append_child(&style).map_err(js_error)?;
        self.styles.push(style);
        Ok(StyleHandle(self.styles.len() - 1))
    }

    fn insert_rule(&mut self, style: StyleHandle, rule: &str) -> Result<()> {
        let element = self
            .styles
            .get(style.0)
            .ok_or_else(|| ColorwayError::Dom(format!("no style element at index {}", style.0)))?;
        let sheet = element
            .sheet()
            .and_then(|sheet| sheet.dyn_into::<CssStyleSheet>().ok())
            .ok_or_else(|| ColorwayError::Dom("style element has no CSS sheet".into()))?;
        let end = sheet.css_rules().map_err(js_error)?.length();
        sheet
            .insert_rule_with_index(rule, end)
            .map_err(|_| ColorwayError::InvalidRule(rule.to_string()))?;
        Ok(())
    }

    fn append_script(&mut self, id: &str, bootstrap: &Bootstrap) -> Result<()> {
        // Inline scripts run synchronously when appended
        let script = self.create_element("script", id)?;
        script.set_text_content(Some(&bootstrap.to_script()));
        self.head.append_child(&script).map_err(js_error)?;
        Ok(())
    }

    fn add_root_class(&mut self, class: &str) -> Result<()> {
        self.root.class_list().add_1(class).map_err(js_error)
    }

    fn remove_root_class(&mut self, class: &str) -> Result<()> {
        self.root.class_list().remove_1(class).map_err(js_error)
    }

    fn root_class_name(&self) -> String {
        self.root.class_name()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.root.set_attribute(name, value).map_err(js_error)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn read_preference(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Err(ColorwayError::Dom("localStorage is unavailable".into())),
        }
    }
}

/// Root class string in a browser, `fallback` anywhere else
pub fn current_theme_name(fallback: &str) -> String {
    let dom = BrowserDom::detect();
    crate::switcher::current_theme_name(dom.as_ref(), fallback)
}

fn parse_config(config_json: &str) -> std::result::Result<ColorwayConfig, JsValue> {
    let config: ColorwayConfig =
        serde_json::from_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

/// Inject the fallback style and the bootstrap script into `document.head`
#[wasm_bindgen(js_name = injectCssVars)]
pub fn inject_css_vars_js(config_json: &str) -> std::result::Result<(), JsValue> {
    let config = parse_config(config_json)?;
    let mut dom = BrowserDom::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    inject_css_vars(&mut dom, &config.args()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Switch to `theme_name` and persist it
#[wasm_bindgen(js_name = changeTheme)]
pub fn change_theme_js(config_json: &str, theme_name: &str) -> std::result::Result<(), JsValue> {
    let config = parse_config(config_json)?;
    let mut dom = BrowserDom::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    ThemeSwitcher::new(&config.themes, config.storage_key.as_str())
        .switch_to(&mut dom, theme_name)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = getCurrentThemeName)]
pub fn current_theme_name_js(fallback: &str) -> String {
    current_theme_name(fallback)
}
