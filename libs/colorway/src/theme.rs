//! Theme data model
//!
//! A [`Theme`] maps token categories (`colors`, `space`, ...) to token names
//! and primitive values. A [`ThemeSet`] maps theme names to themes; one of
//! them is designated the default by the caller, the others are sparse
//! overrides of it. Every map keeps declaration order, which is the order
//! custom properties and class rules are emitted in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive design-token value
///
/// Only strings and numbers are representable. Numbers are emitted the way
/// a browser stringifies them: `1` and `1.0` both as `1`, `1.5` as `1.5`.
/// Config formats that distinguish floats from integers (TOML, YAML) thus
/// render the same as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Numeric token (unitless sizes, weights, ratios)
    Number(serde_json::Number),
    /// Any other token, emitted verbatim
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display drops a zero fraction, unlike the JSON form
            TokenValue::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => write!(f, "{x}"),
                _ => write!(f, "{n}"),
            },
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(value.into())
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::Number(value.into())
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        TokenValue::Number(value.into())
    }
}

impl From<f64> for TokenValue {
    /// Non-finite floats have no JSON number form and fall back to text.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(TokenValue::Number)
            .unwrap_or_else(|| TokenValue::Text(value.to_string()))
    }
}

/// Tokens of one category, keyed by token name
pub type TokenScale = IndexMap<String, TokenValue>;

/// A named set of design tokens: category -> token name -> value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(IndexMap<String, TokenScale>);

impl Theme {
    /// Create an empty theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style token insertion
    pub fn with(
        mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.insert(category, key, value);
        self
    }

    /// Insert or replace a token, returning the previous value
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        self.0
            .entry(category.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Look up a single token
    pub fn get(&self, category: &str, key: &str) -> Option<&TokenValue> {
        self.0.get(category)?.get(key)
    }

    /// Whether the theme defines `(category, key)`
    pub fn contains(&self, category: &str, key: &str) -> bool {
        self.get(category, key).is_some()
    }

    /// Tokens of one category
    pub fn scale(&self, category: &str) -> Option<&TokenScale> {
        self.0.get(category)
    }

    /// Iterate categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = (&String, &TokenScale)> {
        self.0.iter()
    }

    /// Iterate every `(category, key, value)` in declaration order
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str, &TokenValue)> {
        self.0.iter().flat_map(|(category, scale)| {
            scale
                .iter()
                .map(move |(key, value)| (category.as_str(), key.as_str(), value))
        })
    }

    /// Number of tokens across all categories
    pub fn token_count(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }

    /// True when no category holds a token
    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub(crate) fn categories_mut(&mut self) -> impl Iterator<Item = (&String, &mut TokenScale)> {
        self.0.iter_mut()
    }
}

/// Named themes, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSet(IndexMap<String, Theme>);

impl ThemeSet {
    /// Create an empty theme set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style theme insertion
    pub fn with(mut self, name: impl Into<String>, theme: Theme) -> Self {
        self.insert(name, theme);
        self
    }

    /// Insert or replace a theme
    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) -> Option<Theme> {
        self.0.insert(name.into(), theme)
    }

    /// Look up a theme by name
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.0.get(name)
    }

    /// Whether a theme of this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Theme names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(name, theme)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.0.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    /// Every theme except `default_theme`, in declaration order
    pub fn additional<'a>(&'a self, default_theme: &'a str) -> impl Iterator<Item = (&'a str, &'a Theme)> {
        self.iter().filter(move |(name, _)| *name != default_theme)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Theme)> for ThemeSet {
    fn from_iter<I: IntoIterator<Item = (N, Theme)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, theme)| (name.into(), theme)).collect())
    }
}
