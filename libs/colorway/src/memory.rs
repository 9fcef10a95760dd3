//! Headless in-memory document
//!
//! Models the parts of a page Colorway touches: the head's element list,
//! the root element's class list and attributes, and a key/value storage.
//! Appending a script runs its bootstrap immediately, the way an inline
//! script executes when a browser appends it. Useful for SSR hosts that want
//! to pre-compute the root state, and for tests.

use crate::css::check_rule;
use crate::dom::{check_class_token, Dom, StyleHandle};
use crate::error::{ColorwayError, Result};
use crate::inject::{escape_attribute, escape_raw_text};
use crate::script::Bootstrap;
use indexmap::IndexMap;

/// Kind of a head element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Style,
    Script,
}

/// An element appended to the head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub kind: ElementKind,
    pub id: String,
    /// Inserted rules (style elements)
    pub rules: Vec<String>,
    /// Script source (script elements)
    pub text: String,
}

/// In-memory [`Dom`] implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    head: Vec<HeadElement>,
    classes: Vec<String>,
    attributes: IndexMap<String, String>,
    storage: IndexMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a storage snapshot, as after a page reload
    pub fn with_storage(storage: IndexMap<String, String>) -> Self {
        Self {
            storage,
            ..Self::default()
        }
    }

    /// Simulate a reload: the page is rebuilt, storage survives
    pub fn reload(&self) -> Self {
        Self::with_storage(self.storage.clone())
    }

    /// Head elements in append order
    pub fn head(&self) -> &[HeadElement] {
        &self.head
    }

    /// First head element with this id
    pub fn element(&self, id: &str) -> Option<&HeadElement> {
        self.head.iter().find(|el| el.id == id)
    }

    /// Every head element with this id
    pub fn elements<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a HeadElement> {
        self.head.iter().filter(move |el| el.id == id)
    }

    /// Root element classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn storage(&self) -> &IndexMap<String, String> {
        &self.storage
    }

    /// Serialize the head as markup, style rules concatenated
    pub fn to_head_html(&self) -> String {
        self.head
            .iter()
            .map(|el| match el.kind {
                ElementKind::Style => format!(
                    "<style id=\"{}\">{}</style>",
                    escape_attribute(&el.id),
                    escape_raw_text(&el.rules.concat())
                ),
                ElementKind::Script => format!(
                    "<script id=\"{}\">{}</script>",
                    escape_attribute(&el.id),
                    escape_raw_text(&el.text)
                ),
            })
            .collect()
    }
}

impl Dom for MemoryDocument {
    fn append_style(&mut self, id: &str) -> Result<StyleHandle> {
        self.head.push(HeadElement {
            kind: ElementKind::Style,
            id: id.to_string(),
            rules: Vec::new(),
            text: String::new(),
        });
        Ok(StyleHandle(self.head.len() - 1))
    }

    fn insert_rule(&mut self, style: StyleHandle, rule: &str) -> Result<()> {
        check_rule(rule)?;
        match self.head.get_mut(style.0) {
            Some(el) if el.kind == ElementKind::Style => {
                el.rules.push(rule.to_string());
                Ok(())
            }
            _ => Err(ColorwayError::Dom(format!("no style element at index {}", style.0))),
        }
    }

    fn append_script(&mut self, id: &str, bootstrap: &Bootstrap) -> Result<()> {
        self.head.push(HeadElement {
            kind: ElementKind::Script,
            id: id.to_string(),
            rules: Vec::new(),
            text: bootstrap.to_script(),
        });
        bootstrap.apply(self)
    }

    fn add_root_class(&mut self, class: &str) -> Result<()> {
        check_class_token(class)?;
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_root_class(&mut self, class: &str) -> Result<()> {
        self.classes.retain(|c| c != class);
        Ok(())
    }

    fn root_class_name(&self) -> String {
        self.classes.join(" ")
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn read_preference(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
