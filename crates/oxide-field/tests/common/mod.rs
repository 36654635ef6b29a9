#![allow(dead_code)]

use oxide_field::{FieldType, FormField, ValidationErrors};

pub const FEEDBACK_ICON: &str =
    r#"<span class="glyphicon glyphicon-remove form-control-feedback"></span>"#;

pub fn errors(entries: &[(&str, &str)]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, message) in entries {
        errors.add(field, *message);
    }
    errors
}

pub fn all_types() -> impl Iterator<Item = FieldType> {
    FieldType::ALL.into_iter()
}

pub fn field_of(field_type: FieldType) -> FormField {
    FormField::new("subject")
        .type_(field_type)
        .value("v")
        .options(vec![("v", "V"), ("w", "W")])
}

/// Extracts the value of the `class` attribute of the first `tag` element.
pub fn class_of<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let start = html.find(&format!("<{tag} "))?;
    let rest = &html[start..];
    let end = rest.find('>')?;
    let open = &rest[..end];
    let class_start = open.find(r#"class=""#)? + r#"class=""#.len();
    let class_len = open[class_start..].find('"')?;
    Some(&open[class_start..class_start + class_len])
}

pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("Expected {needle:?} in {html}"))
}
