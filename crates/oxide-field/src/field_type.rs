//! Field types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// The kind of HTML input a field renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FieldType {
    /// Text input (default).
    #[default]
    Text,
    /// Password input.
    Password,
    /// File upload.
    File,
    /// Dropdown select.
    Select,
    /// Single checkbox.
    Checkbox,
    /// Single radio button.
    Radio,
    /// Multi-line text.
    Textarea,
    /// Email input.
    Email,
    /// Hidden input.
    Hidden,
    /// Number input.
    Number,
    /// Telephone input.
    Tel,
    /// URL input.
    Url,
    /// Date input.
    Date,
    /// Time input.
    Time,
    /// Color picker.
    Color,
    /// Range slider.
    Range,
    /// Search input.
    Search,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Text,
        Self::Password,
        Self::File,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Textarea,
        Self::Email,
        Self::Hidden,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Date,
        Self::Time,
        Self::Color,
        Self::Range,
        Self::Search,
    ];

    /// Returns the type name, which doubles as the HTML `type` attribute
    /// for plain inputs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::File => "file",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Hidden => "hidden",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Date => "date",
            Self::Time => "time",
            Self::Color => "color",
            Self::Range => "range",
            Self::Search => "search",
        }
    }

    /// Checkboxes and radios get no default `form-control` class and are
    /// rendered inside their label.
    #[must_use]
    pub const fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownFieldType(s.to_string()))
    }
}

impl TryFrom<String> for FieldType {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for &'static str {
    fn from(value: FieldType) -> Self {
        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("select".parse::<FieldType>().unwrap(), FieldType::Select);
        assert_eq!("TEXTAREA".parse::<FieldType>().unwrap(), FieldType::Textarea);
        for ty in FieldType::ALL {
            assert_eq!(ty.as_str().parse::<FieldType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = "datetime".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, FieldError::UnknownFieldType(ref s) if s == "datetime"));
    }

    #[test]
    fn test_checkable() {
        assert!(FieldType::Checkbox.is_checkable());
        assert!(FieldType::Radio.is_checkable());
        assert!(!FieldType::Select.is_checkable());
    }

    #[test]
    fn test_serde_by_name() {
        let ty: FieldType = serde_json::from_str(r#""password""#).unwrap();
        assert_eq!(ty, FieldType::Password);
        assert_eq!(serde_json::to_string(&FieldType::File).unwrap(), r#""file""#);
        assert!(serde_json::from_str::<FieldType>(r#""nope""#).is_err());
    }
}
