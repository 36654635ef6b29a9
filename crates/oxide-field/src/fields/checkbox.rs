//! Checkbox and radio field types.

use crate::field::FormField;
use crate::field_type::FieldType;

/// Creates a checkbox.
pub fn checkbox_field(name: &str, checked: bool) -> FormField {
    FormField::new(name)
        .type_(FieldType::Checkbox)
        .checked(checked)
}

/// Creates one radio button of a group sharing `name`.
///
/// The id is suffixed with the value so buttons of the same group stay
/// distinct.
pub fn radio_field(name: &str, value: &str, checked: bool) -> FormField {
    FormField::new(name)
        .type_(FieldType::Radio)
        .value(value)
        .id(format!("{name}_{value}"))
        .checked(checked)
}
