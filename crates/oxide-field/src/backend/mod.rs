//! Rendering backend for the individual tags of a field.
//!
//! [`FormField`](crate::FormField) decides *what* goes where (group wrapper,
//! addons, feedback); a [`FieldRenderer`] turns a single label or input into
//! markup. [`HtmlRenderer`] is the stock implementation.

mod html;

pub use html::HtmlRenderer;

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::field_type::FieldType;

/// Ordered HTML attributes.
///
/// An attribute without a value is a boolean marker and renders bare
/// (`required`, `disabled`, ...). Setting an existing key keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn put(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key.into(), Some(value.into()));
    }

    /// Sets a boolean marker attribute.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.put(key.into(), None);
    }

    /// Removes an attribute, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }

    /// Gets an attribute value. Marker attributes have no value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns whether the attribute is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Copies every attribute of `other` into `self`, overriding on
    /// conflict.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.put(key.clone(), value.clone());
        }
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(k, v)| match v {
                Some(v) => format!(r#"{k}="{}""#, html_escape(v)),
                None => k.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders attributes with a leading space, or nothing when empty.
    pub(crate) fn to_html_suffix(&self) -> String {
        if self.entries.is_empty() {
            String::new()
        } else {
            format!(" {}", self.to_html())
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a marker attribute.
    #[must_use]
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of HTML attributes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
                let mut attrs = Attributes::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    match value {
                        Value::Null | Value::Bool(false) => {}
                        Value::Bool(true) => attrs.set_flag(key),
                        Value::String(s) => attrs.set(key, s),
                        Value::Number(n) => attrs.set(key, n.to_string()),
                        Value::Array(items) => {
                            let joined = items
                                .iter()
                                .filter_map(|item| match item {
                                    Value::String(s) => Some(s.clone()),
                                    Value::Number(n) => Some(n.to_string()),
                                    _ => None,
                                })
                                .collect::<Vec<_>>()
                                .join(" ");
                            attrs.set(key, joined);
                        }
                        Value::Object(_) => {
                            return Err(de::Error::custom(format!(
                                "attribute `{key}` cannot be a nested map"
                            )));
                        }
                    }
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// A rendered `<label>` kept in pieces so content can be placed right after
/// the opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTag {
    /// Opening tag, e.g. `<label for="id">`.
    pub open: String,
    /// Escaped label text.
    pub text: String,
    /// Closing tag.
    pub close: String,
}

impl LabelTag {
    /// Renders the label.
    pub fn render(&self) -> String {
        format!("{}{}{}", self.open, self.text, self.close)
    }

    /// Renders the label with `inner` placed immediately after the opening
    /// tag, as Bootstrap expects for inline checkboxes and radios.
    pub fn render_wrapping(&self, inner: &str) -> String {
        format!("{}{inner}{}{}", self.open, self.text, self.close)
    }
}

/// Backend that renders the label and input tags of a field.
pub trait FieldRenderer {
    /// Renders a label pointing at `for_id`.
    fn label(&self, for_id: &str, text: &str, attrs: &Attributes) -> LabelTag;

    /// Renders a plain `<input>` of the given type.
    fn input(
        &self,
        field_type: FieldType,
        name: &str,
        value: Option<&str>,
        attrs: &Attributes,
    ) -> String;

    /// Renders a password input. Passwords never echo a value.
    fn password(&self, name: &str, attrs: &Attributes) -> String {
        self.input(FieldType::Password, name, None, attrs)
    }

    /// Renders a file input.
    fn file(&self, name: &str, attrs: &Attributes) -> String {
        self.input(FieldType::File, name, None, attrs)
    }

    /// Renders a textarea.
    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String;

    /// Renders a select with `(value, label)` options.
    fn select(
        &self,
        name: &str,
        options: &[(String, String)],
        selected: Option<&str>,
        attrs: &Attributes,
    ) -> String;

    /// Renders a checkbox.
    fn checkbox(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String;

    /// Renders a radio button.
    fn radio(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String;
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attributes_keep_order() {
        let attrs = Attributes::new()
            .with("id", "email")
            .with_flag("required")
            .with("class", "form-control")
            .with("id", "user-email");
        assert_eq!(
            attrs.to_html(),
            r#"id="user-email" required class="form-control""#
        );
    }

    #[test]
    fn test_attributes_remove_and_flags() {
        let mut attrs = Attributes::new().with_flag("disabled").with("rows", "3");
        assert!(attrs.contains("disabled"));
        assert_eq!(attrs.get("disabled"), None);
        assert_eq!(attrs.get("rows"), Some("3"));
        assert!(attrs.remove("disabled"));
        assert!(!attrs.remove("disabled"));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("rows", Some("3"))]);
    }

    #[test]
    fn test_attributes_merge() {
        let mut base = Attributes::new().with("a", "1").with("b", "2");
        base.merge(&Attributes::new().with("b", "3").with("c", "4"));
        assert_eq!(base.to_html(), r#"a="1" b="3" c="4""#);
    }

    #[test]
    fn test_attribute_values_escaped() {
        let attrs = Attributes::new().with("title", r#"say "hi" > bye"#);
        assert_eq!(attrs.to_html(), r#"title="say &quot;hi&quot; &gt; bye""#);
    }

    #[test]
    fn test_deserialize_attributes() {
        let attrs: Attributes = serde_json::from_str(
            r#"{"placeholder": "Name", "tabindex": 2, "required": true,
                "disabled": false, "hint": null, "class": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(
            attrs.to_html(),
            r#"placeholder="Name" tabindex="2" required class="a b""#
        );
    }

    #[test]
    fn test_deserialize_rejects_nested_maps() {
        let res = serde_json::from_str::<Attributes>(r#"{"data": {"x": 1}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_label_tag_wrapping() {
        let label = LabelTag {
            open: r#"<label for="agree">"#.to_string(),
            text: "Agree".to_string(),
            close: "</label>".to_string(),
        };
        assert_eq!(label.render(), r#"<label for="agree">Agree</label>"#);
        assert_eq!(
            label.render_wrapping("<input>"),
            r#"<label for="agree"><input>Agree</label>"#
        );
    }
}
