//! Bootstrap program injected into the document head
//!
//! The bootstrap creates the class rules and restores the persisted theme
//! before the body is parsed. It is plain data (the ordered class rules, the
//! default theme name and the storage key) that can be rendered to an inline
//! script for browsers or applied directly to any [`Dom`].

use crate::config::ColorwayArgs;
use crate::css::{check_rule, create_theme_class_rules};
use crate::dom::{Dom, THEMES_STYLE_ID, THEME_ATTRIBUTE};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Page-load program: install class rules, then restore the saved theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    /// One class rule per non-default theme, in theme set order
    pub rules: Vec<String>,
    pub default_theme: String,
    pub storage_key: String,
}

impl Bootstrap {
    pub fn new(args: &ColorwayArgs<'_>) -> Self {
        Self {
            rules: create_theme_class_rules(args.themes, args.default_theme),
            default_theme: args.default_theme.to_string(),
            storage_key: args.storage_key.to_string(),
        }
    }

    /// Run the program against a document.
    ///
    /// Appends the `__cssVarThemes` style element, inserts every class rule
    /// through the sheet, then adds the persisted theme (if any) as a root
    /// class. The root `data-theme` attribute is set to the persisted theme,
    /// or the default when nothing was saved. Rules are checked before the
    /// style element is appended.
    pub fn apply<D: Dom + ?Sized>(&self, dom: &mut D) -> Result<()> {
        for rule in &self.rules {
            check_rule(rule)?;
        }
        let style = dom.append_style(THEMES_STYLE_ID)?;
        for rule in &self.rules {
            dom.insert_rule(style, rule)?;
        }
        debug!("Inserted {} theme class rule(s)", self.rules.len());

        let persisted = dom
            .read_preference(&self.storage_key)
            .filter(|name| !name.is_empty());

        if let Some(name) = &persisted {
            debug!("Restoring persisted theme {name}");
            dom.add_root_class(name)?;
        }

        let active = persisted.as_deref().unwrap_or(&self.default_theme);
        dom.set_root_attribute(THEME_ATTRIBUTE, active)
    }

    /// Render the program as a self-invoking script.
    ///
    /// Parameters are embedded as JSON literals with `<` escaped, so the text
    /// can be placed inside a `<script>` element as-is.
    pub fn to_script(&self) -> String {
        let rules = js_literal(Value::from(self.rules.clone()));
        let default_theme = js_literal(Value::from(self.default_theme.as_str()));
        let storage_key = js_literal(Value::from(self.storage_key.as_str()));

        format!(
            "(function(){{\
var rules={rules},defaultTheme={default_theme},storageKey={storage_key};\
var doc=document,root=doc.documentElement,style=doc.createElement(\"style\");\
style.id=\"{THEMES_STYLE_ID}\";\
doc.head.appendChild(style);\
for(var i=0;i<rules.length;i++)style.sheet.insertRule(rules[i],style.sheet.cssRules.length);\
var theme=null;\
try{{theme=window.localStorage.getItem(storageKey)}}catch(e){{}}\
if(theme)root.classList.add(theme);\
root.setAttribute(\"{THEME_ATTRIBUTE}\",theme||defaultTheme)\
}})()"
        )
    }
}

fn js_literal(value: Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

/// Creates the inline script text that installs the class rules and restores
/// the persisted theme at page load.
pub fn create_injectable_script(args: &ColorwayArgs<'_>) -> String {
    Bootstrap::new(args).to_script()
}
