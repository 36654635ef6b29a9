//! Plain HTML rendering of labels and inputs.

use super::{html_escape, Attributes, FieldRenderer, LabelTag};
use crate::field_type::FieldType;

// Textarea size when the attributes leave it unset.
const DEFAULT_COLS: &str = "50";
const DEFAULT_ROWS: &str = "10";

/// Stock [`FieldRenderer`] emitting plain HTML tags.
///
/// `name` comes first, then `value` (escaped), then the caller's attributes
/// in insertion order. Classes, ids and ARIA concerns are left to the
/// attributes passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new renderer.
    pub const fn new() -> Self {
        Self
    }

    fn checkable(
        field_type: FieldType,
        name: &str,
        value: &str,
        checked: bool,
        attrs: &Attributes,
    ) -> String {
        let checked_attr = if checked { " checked" } else { "" };
        format!(
            r#"<input type="{}" name="{}" value="{}"{checked_attr}{}>"#,
            field_type,
            html_escape(name),
            html_escape(value),
            attrs.to_html_suffix()
        )
    }
}

impl FieldRenderer for HtmlRenderer {
    fn label(&self, for_id: &str, text: &str, attrs: &Attributes) -> LabelTag {
        let for_attr = if for_id.is_empty() {
            String::new()
        } else {
            format!(r#" for="{}""#, html_escape(for_id))
        };

        LabelTag {
            open: format!("<label{for_attr}{}>", attrs.to_html_suffix()),
            text: html_escape(text),
            close: "</label>".to_string(),
        }
    }

    fn input(
        &self,
        field_type: FieldType,
        name: &str,
        value: Option<&str>,
        attrs: &Attributes,
    ) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="{}" name="{}"{value_attr}{}>"#,
            field_type,
            html_escape(name),
            attrs.to_html_suffix()
        )
    }

    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        let mut attrs = attrs.clone();
        if !attrs.contains("cols") {
            attrs.set("cols", DEFAULT_COLS);
        }
        if !attrs.contains("rows") {
            attrs.set("rows", DEFAULT_ROWS);
        }

        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}"{}>{content}</textarea>"#,
            html_escape(name),
            attrs.to_html_suffix()
        )
    }

    fn select(
        &self,
        name: &str,
        options: &[(String, String)],
        selected: Option<&str>,
        attrs: &Attributes,
    ) -> String {
        let mut html = format!(
            r#"<select name="{}"{}>"#,
            html_escape(name),
            attrs.to_html_suffix()
        );

        for (opt_value, label) in options {
            let is_selected = selected.is_some_and(|v| v == opt_value);
            let selected_attr = if is_selected { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        html.push_str("</select>");
        html
    }

    fn checkbox(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        Self::checkable(FieldType::Checkbox, name, value, checked, attrs)
    }

    fn radio(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        Self::checkable(FieldType::Radio, name, value, checked, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<(String, String)> {
        vec![
            ("a".to_string(), "A".to_string()),
            ("b".to_string(), "B".to_string()),
        ]
    }

    #[test]
    fn test_text_input() {
        let attrs = Attributes::new().with("id", "username");
        let html = HtmlRenderer.input(FieldType::Text, "username", Some("bob"), &attrs);
        assert_eq!(
            html,
            r#"<input type="text" name="username" value="bob" id="username">"#
        );
    }

    #[test]
    fn test_input_without_value() {
        let html = HtmlRenderer.input(FieldType::Email, "email", None, &Attributes::new());
        assert_eq!(html, r#"<input type="email" name="email">"#);
    }

    #[test]
    fn test_password_never_echoes() {
        let html = HtmlRenderer.password("secret", &Attributes::new());
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_file_input() {
        let html = HtmlRenderer.file("avatar", &Attributes::new().with_flag("multiple"));
        assert_eq!(html, r#"<input type="file" name="avatar" multiple>"#);
    }

    #[test]
    fn test_textarea() {
        let attrs = Attributes::new().with("rows", "3");
        let html = HtmlRenderer.textarea("bio", Some("<b>hi</b>"), &attrs);
        assert_eq!(
            html,
            r#"<textarea name="bio" rows="3" cols="50">&lt;b&gt;hi&lt;/b&gt;</textarea>"#
        );
    }

    #[test]
    fn test_textarea_default_size() {
        let html = HtmlRenderer::new().textarea("notes", None, &Attributes::new());
        assert_eq!(
            html,
            r#"<textarea name="notes" cols="50" rows="10"></textarea>"#
        );
    }

    #[test]
    fn test_select_marks_selected() {
        let html = HtmlRenderer.select("letter", &options(), Some("b"), &Attributes::new());
        assert!(html.contains(r#"<option value="a">A</option>"#));
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
    }

    #[test]
    fn test_select_without_selection() {
        let html = HtmlRenderer.select("letter", &options(), None, &Attributes::new());
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_checkbox_and_radio() {
        let attrs = Attributes::new().with("id", "agree");
        assert_eq!(
            HtmlRenderer.checkbox("agree", "1", true, &attrs),
            r#"<input type="checkbox" name="agree" value="1" checked id="agree">"#
        );
        assert_eq!(
            HtmlRenderer.radio("size", "m", false, &Attributes::new()),
            r#"<input type="radio" name="size" value="m">"#
        );
    }

    #[test]
    fn test_label() {
        let attrs = Attributes::new().with("class", "sr-only");
        let label = HtmlRenderer.label("email", "E-mail & co", &attrs);
        assert_eq!(
            label.render(),
            r#"<label for="email" class="sr-only">E-mail &amp; co</label>"#
        );
    }

    #[test]
    fn test_label_without_target() {
        let label = HtmlRenderer.label("", "Name", &Attributes::new());
        assert_eq!(label.render(), "<label>Name</label>");
    }
}
