//! # Colorway
//!
//! Design tokens as CSS custom properties, with runtime theme switching that
//! does not flash the wrong theme on first paint.
//!
//! This library provides:
//! - A theme model (category -> token -> value) and a converter turning a
//!   theme into `var(--category-key)` references for application code
//! - The fallback rule declaring the default theme on `html`
//! - One class rule per additional theme, overriding only what it defines
//! - A bootstrap program that installs the class rules and restores the
//!   persisted theme, rendered as an inline script or applied to a [`Dom`]
//! - Head injection for live documents and head markup for server rendering
//! - A theme switcher persisting the active theme under one storage key
//!
//! ## Page lifecycle
//!
//! ```text
//! <head>
//!   <style id="__cssVarsFallback">html{--colors-bg:white;...}</style>
//!   <script id="__cssVarsInjector">
//!     -> <style id="__cssVarThemes">.dark{--colors-bg:black;...}</style>
//!     -> <html class="<persisted theme>">
//!   </script>
//! </head>
//! ```

pub mod config;
pub mod css;
pub mod dom;
pub mod error;
pub mod inject;
pub mod memory;
pub mod script;
pub mod switcher;
pub mod theme;
pub mod vars;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ColorwayArgs, ColorwayConfig, DEFAULT_STORAGE_KEY};
pub use css::{check_rule, create_fallback_style_string, create_theme_class_rules};
pub use dom::{check_class_token, Dom, StyleHandle};
pub use error::{ColorwayError, Result};
pub use inject::{css_vars_head, inject_css_vars, HeadTags};
pub use memory::MemoryDocument;
pub use script::{create_injectable_script, Bootstrap};
pub use switcher::{active_theme, create_change_theme_fn, current_theme_name, ThemeSwitcher};
pub use theme::{Theme, ThemeSet, TokenValue};
pub use vars::{convert_theme_to_css_vars, css_var_name, css_var_ref};
