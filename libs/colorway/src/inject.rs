//! Head injection
//!
//! Two ways to get the theme artifacts into `<head>`:
//!
//! - [`inject_css_vars`] mutates a live document (client-side rendering);
//! - [`css_vars_head`] returns the same artifacts as text for a
//!   server-rendering host to place in its own head output.
//!
//! Either way the fallback rule comes first and the bootstrap script second,
//! both ahead of the body, so the right variables apply on first paint.

use crate::config::ColorwayArgs;
use crate::css::{check_rule, create_fallback_style_string};
use crate::dom::{Dom, FALLBACK_STYLE_ID, INJECTOR_SCRIPT_ID};
use crate::error::Result;
use crate::script::Bootstrap;
use serde::Serialize;
use tracing::debug;

/// Append the fallback `<style>` holding the default theme rule.
///
/// The rule is checked before anything is appended, so a rejected rule
/// leaves the head unchanged.
pub fn inject_css_var_fallback_style<D: Dom + ?Sized>(dom: &mut D, args: &ColorwayArgs<'_>) -> Result<()> {
    let rule = create_fallback_style_string(args.themes, args.default_theme);
    check_rule(&rule)?;
    let style = dom.append_style(FALLBACK_STYLE_ID)?;
    dom.insert_rule(style, &rule)
}

/// Append the bootstrap `<script>` installing the class rules
pub fn inject_css_var_script<D: Dom + ?Sized>(dom: &mut D, args: &ColorwayArgs<'_>) -> Result<()> {
    dom.append_script(INJECTOR_SCRIPT_ID, &Bootstrap::new(args))
}

/// Injects the fallback style and the bootstrap script into the document head.
///
/// Call once per page load. Calling it again appends a second pair of
/// elements carrying the same ids; that is not treated as an error.
pub fn inject_css_vars<D: Dom + ?Sized>(dom: &mut D, args: &ColorwayArgs<'_>) -> Result<()> {
    debug!(
        "Injecting {} theme(s), default {}, storage key {}",
        args.themes.len(),
        args.default_theme,
        args.storage_key
    );
    inject_css_var_fallback_style(dom, args)?;
    inject_css_var_script(dom, args)
}

/// Keep element text from closing its raw-text element (`</` becomes `<\/`)
pub(crate) fn escape_raw_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

/// Escape a double-quoted attribute value
pub(crate) fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Head artifacts for server-rendered pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTags {
    /// Body of `<style id="__cssVarsFallback">`
    pub style: String,
    /// Body of `<script id="__cssVarsInjector">`
    pub script: String,
}

impl HeadTags {
    /// Render both elements, style first
    pub fn to_html(&self) -> String {
        format!(
            "<style id=\"{FALLBACK_STYLE_ID}\">{}</style><script id=\"{INJECTOR_SCRIPT_ID}\">{}</script>",
            escape_raw_text(&self.style),
            escape_raw_text(&self.script)
        )
    }
}

/// Produces the fallback style text and the bootstrap script text without
/// touching any document.
pub fn css_vars_head(args: &ColorwayArgs<'_>) -> HeadTags {
    HeadTags {
        style: create_fallback_style_string(args.themes, args.default_theme),
        script: Bootstrap::new(args).to_script(),
    }
}
