//! Select field type.

use crate::field::FormField;
use crate::field_type::FieldType;

/// Creates a select field with `(value, label)` options.
pub fn select_field(name: &str, options: Vec<(&str, &str)>) -> FormField {
    FormField::new(name).type_(FieldType::Select).options(options)
}
