//! Error types and the validation error bag.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Field-specific errors.
///
/// Rendering never fails; these only come out of configuration loading and
/// type-name parsing.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Unknown field type name.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// Malformed JSON configuration.
    #[error("invalid field configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of validation errors consulted while rendering a field.
///
/// Keys are normalized validation keys (see [`crate::naming::validation_key`]).
pub trait ErrorBag {
    /// Returns whether there is at least one error for `key`.
    fn has(&self, key: &str) -> bool;

    /// Returns the first error message for `key`.
    fn first(&self, key: &str) -> Option<&str>;

    /// Returns whether the bag holds no errors at all.
    fn is_empty(&self) -> bool;
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns all errors as a flat list, sorted by field name.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        let mut all: Vec<_> = self
            .errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect();
        all.sort_by_key(|(field, _)| *field);
        all
    }
}

impl ErrorBag for ValidationErrors {
    fn has(&self, key: &str) -> bool {
        self.errors.get(key).is_some_and(|m| !m.is_empty())
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.errors
            .get(key)
            .and_then(|m| m.first())
            .map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.all_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_bag_lookup() {
        let errors = ValidationErrors::new()
            .with("user_email", "The email is invalid.")
            .with("user_email", "The email is taken.");

        assert!(errors.has("user_email"));
        assert!(!errors.has("user.email"));
        assert_eq!(errors.first("user_email"), Some("The email is invalid."));
        assert_eq!(errors.first("missing"), None);
        assert!(!ErrorBag::is_empty(&errors));
    }

    #[test]
    fn test_empty_bag() {
        let errors = ValidationErrors::new();
        assert!(ErrorBag::is_empty(&errors));
        assert!(!errors.has("anything"));
    }

    #[test]
    fn test_deserialize_bag() {
        let errors: ValidationErrors =
            serde_json::from_str(r#"{"name": ["Required."], "age": []}"#).unwrap();
        assert!(errors.has("name"));
        assert!(!errors.has("age"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_display_is_sorted() {
        let errors = ValidationErrors::new().with("b", "second").with("a", "first");
        assert_eq!(errors.to_string(), "a: first\nb: second\n");
    }
}
