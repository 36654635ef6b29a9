//! Text-like field types.

use crate::field::FormField;
use crate::field_type::FieldType;

/// Creates a text field.
pub fn text_field(name: &str) -> FormField {
    FormField::new(name)
}

/// Creates an email field.
pub fn email_field(name: &str) -> FormField {
    FormField::new(name).type_(FieldType::Email)
}

/// Creates a password field.
pub fn password_field(name: &str) -> FormField {
    FormField::new(name).type_(FieldType::Password)
}

/// Creates a file upload field.
pub fn file_field(name: &str) -> FormField {
    FormField::new(name).type_(FieldType::File)
}

/// Creates a textarea with the given number of rows.
pub fn textarea_field(name: &str, rows: u32) -> FormField {
    FormField::new(name).type_(FieldType::Textarea).rows(rows)
}

/// Creates a hidden field. Hidden inputs carry no label or feedback.
pub fn hidden_field(name: &str, value: &str) -> FormField {
    FormField::new(name)
        .type_(FieldType::Hidden)
        .value(value)
        .no_label()
        .no_feedback()
}
