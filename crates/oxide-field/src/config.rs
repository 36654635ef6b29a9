//! Field configuration.
//!
//! [`FieldConfig`] is the plain-data form of everything a
//! [`FormField`](crate::FormField) carries besides its name, label and
//! feedback mode. It can be built in code or loaded from JSON:
//!
//! ```
//! use oxide_field::config::FieldConfig;
//!
//! let config = FieldConfig::from_json(r#"{
//!     "type": "select",
//!     "value": "b",
//!     "options": [["a", "A"], ["b", "B"]],
//!     "field": {"required": true},
//!     "input_group": {"before": "@"}
//! }"#).unwrap();
//!
//! assert_eq!(config.value.as_deref(), Some("b"));
//! assert_eq!(config.options.len(), 2);
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::backend::Attributes;
use crate::error::Result;
use crate::field_type::FieldType;

/// Prefix/suffix addons rendered inside a Bootstrap `input-group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputGroup {
    /// Content before the input.
    pub before: Option<String>,
    /// Content after the input.
    pub after: Option<String>,
}

impl InputGroup {
    /// Returns whether neither addon is set.
    pub const fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

/// Configuration of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field type. `None` keeps the field's current type.
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    /// Attributes of the `<label>` tag.
    pub label: Attributes,
    /// Attributes of the input tag.
    pub field: Attributes,
    /// Input-group addons.
    pub input_group: InputGroup,
    /// Current value (selected option for selects).
    pub value: Option<String>,
    /// Whether a checkbox/radio is checked.
    pub checked: bool,
    /// Explicit classes of the wrapping group.
    #[serde(deserialize_with = "deserialize_classes")]
    pub class: Option<Vec<String>>,
    /// Raw content inside the group, after the label.
    pub before: Option<String>,
    /// Raw content inside the group, after the input.
    pub after: Option<String>,
    /// Raw content inside the group, before the label.
    pub before_label: Option<String>,
    /// Explicit element id.
    pub id: Option<String>,
    /// Prefix joined to the name when no id is given.
    pub id_prefix: Option<String>,
    /// Select options as `(value, label)` pairs.
    pub options: Vec<(String, String)>,
}

impl FieldConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading field configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Accepts either `"a b"` or `["a", "b"]`.
fn deserialize_classes<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Classes {
        Joined(String),
        List(Vec<String>),
    }

    Ok(
        Option::<Classes>::deserialize(deserializer)?.map(|classes| match classes {
            Classes::Joined(s) => crate::naming::class_list(&s),
            Classes::List(list) => list,
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_empty_config() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::new());
        assert!(config.input_group.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = FieldConfig::from_json(
            r#"{
                "type": "checkbox",
                "label": {"class": "inline"},
                "field": {"data-toggle": "x", "tabindex": 3},
                "checked": true,
                "class": "wide  compact",
                "before_label": "<hr>",
                "id_prefix": "edit-"
            }"#,
        )
        .unwrap();

        assert_eq!(config.field_type, Some(FieldType::Checkbox));
        assert_eq!(config.label.get("class"), Some("inline"));
        assert_eq!(config.field.get("tabindex"), Some("3"));
        assert!(config.checked);
        assert_eq!(
            config.class,
            Some(vec!["wide".to_string(), "compact".to_string()])
        );
        assert_eq!(config.before_label.as_deref(), Some("<hr>"));
        assert_eq!(config.id_prefix.as_deref(), Some("edit-"));
    }

    #[test]
    fn test_class_list_form() {
        let config = FieldConfig::from_json(r#"{"class": ["a", "b"]}"#).unwrap();
        assert_eq!(config.class, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = FieldConfig::from_json(r#"{"type": "spinner"}"#).unwrap_err();
        assert!(matches!(err, FieldError::Config(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"value": "hello"}}"#).unwrap();

        let config = FieldConfig::from_path(file.path()).unwrap();
        assert_eq!(config.value.as_deref(), Some("hello"));
    }

    #[test]
    fn test_from_missing_path() {
        let err = FieldConfig::from_path("/nonexistent/field.json").unwrap_err();
        assert!(matches!(err, FieldError::Io(_)));
    }
}
