//! The form field builder and its HTML rendering.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;
use tracing::{debug, trace};

use crate::assets::AssetRegistry;
use crate::backend::{html_escape, Attributes, FieldRenderer, HtmlRenderer, LabelTag};
use crate::config::{FieldConfig, InputGroup};
use crate::error::ErrorBag;
use crate::field_type::FieldType;
use crate::naming::{class_list, label_from_name, validation_key};

const FEEDBACK_ICON: &str =
    r#"<span class="glyphicon glyphicon-remove form-control-feedback"></span>"#;

/// How validation errors are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Error state and message are shown.
    #[default]
    Enabled,
    /// Errors are ignored.
    Disabled,
    /// Error state is shown, the message is not.
    Silent,
}

/// A form field: label, input, addons and validation feedback wrapped in a
/// Bootstrap `form-group`.
///
/// Configure it by chaining builder methods, then render it with
/// [`to_html`](Self::to_html), [`to_html_with`](Self::to_html_with) or
/// [`render`](Self::render).
///
/// ```
/// use oxide_field::{FormField, ValidationErrors};
///
/// let errors = ValidationErrors::new().with("user_email", "Invalid address.");
/// let html = FormField::new("user.email")
///     .label("Email")
///     .required(true)
///     .to_html_with(&errors);
///
/// assert!(html.contains("has-error has-feedback"));
/// assert!(html.contains("Invalid address."));
/// ```
#[derive(Debug, Clone)]
pub struct FormField {
    name: Option<String>,
    label: String,
    field_type: FieldType,
    config: FieldConfig,
    field_classes: Vec<String>,
    group_classes: Vec<String>,
    default_class: bool,
    default_group_class: bool,
    feedback: Feedback,
    show_label: bool,
    before_group: Option<String>,
    after_group: Option<String>,
    scripts: Vec<String>,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            name: None,
            label: String::new(),
            field_type: FieldType::Text,
            config: FieldConfig::new(),
            field_classes: Vec::new(),
            group_classes: Vec::new(),
            default_class: true,
            default_group_class: true,
            feedback: Feedback::Enabled,
            show_label: true,
            before_group: None,
            after_group: None,
            scripts: Vec::new(),
        }
    }
}

impl FormField {
    /// Creates a text field whose label is derived from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: label_from_name(&name),
            name: Some(name),
            ..Self::default()
        }
    }

    /// Creates a field from a configuration.
    ///
    /// An empty `label` is derived from `name`. Classes present in the
    /// configuration replace the defaults, as with [`set_group_class`] and
    /// [`set_class`].
    ///
    /// [`set_group_class`]: Self::set_group_class
    /// [`set_class`]: Self::set_class
    pub fn from_config(
        name: impl Into<String>,
        label: impl Into<String>,
        mut config: FieldConfig,
    ) -> Self {
        let mut field = Self::new(name);

        let label = label.into();
        if !label.is_empty() {
            field.label = label;
        }
        if let Some(field_type) = config.field_type {
            field.field_type = field_type;
        }

        let group_class = config.class.take();
        let class = config.field.get("class").map(str::to_string);
        config.field.remove("class");
        field.config = config;

        if let Some(classes) = group_class {
            field = field.set_group_class(classes.join(" "));
        }
        if let Some(class) = class {
            field = field.set_class(class);
        }
        field
    }

    /// Sets the input name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the input name. Alias of [`name`](Self::name).
    #[must_use]
    pub fn input(self, name: impl Into<String>) -> Self {
        self.name(name)
    }

    /// Returns the input name.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the label text.
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Returns the field type.
    pub const fn get_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the feedback mode.
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Returns the configuration the field renders from.
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns the key validation errors for this field are looked up by.
    pub fn validation_key(&self) -> Option<String> {
        self.name.as_deref().map(validation_key)
    }

    /// Sets the field type.
    #[must_use]
    pub fn type_(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Sets an attribute by dot-path key.
    ///
    /// `label.<attr>` and `field.<attr>` target the label and input tags,
    /// `input_group.before`/`input_group.after` the addons. Top-level keys
    /// are `class`, `value`, `checked`, `before`, `after`, `before_label`,
    /// `id` and `id_prefix`; anything else is ignored.
    #[must_use]
    pub fn attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match key.split_once('.') {
            Some(("label", attr)) => self.config.label.set(attr, value),
            Some(("field", "class")) => self.field_classes = class_list(&value),
            Some(("field", attr)) => self.config.field.set(attr, value),
            Some(("input_group", "before")) => self.config.input_group.before = Some(value),
            Some(("input_group", "after")) => self.config.input_group.after = Some(value),
            _ => match key {
                "class" => self.group_classes = class_list(&value),
                "value" => self.config.value = Some(value),
                "checked" => self.config.checked = !(value.is_empty() || value == "0"),
                "before" => self.config.before = Some(value),
                "after" => self.config.after = Some(value),
                "before_label" => self.config.before_label = Some(value),
                "id" => self.config.id = Some(value),
                "id_prefix" => self.config.id_prefix = Some(value),
                _ => debug!(key, "Ignoring unknown field attribute"),
            },
        }
        self
    }

    /// Records scripts this field needs on the page.
    ///
    /// They are handed to a registry by
    /// [`register_assets`](Self::register_assets).
    #[must_use]
    pub fn enqueue<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts.extend(scripts.into_iter().map(Into::into));
        self
    }

    /// Returns the scripts recorded with [`enqueue`](Self::enqueue).
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Hands every recorded script to `registry`.
    pub fn register_assets<R: AssetRegistry + ?Sized>(&self, registry: &mut R) {
        for script in &self.scripts {
            debug!(script = script.as_str(), "Enqueueing field script");
            registry.enqueue(script);
        }
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Merges attributes into the label tag, or replaces them all when
    /// `overwrite` is set.
    #[must_use]
    pub fn label_attributes(mut self, attrs: &Attributes, overwrite: bool) -> Self {
        if overwrite {
            self.config.label = attrs.clone();
        } else {
            self.config.label.merge(attrs);
        }
        self
    }

    /// Merges attributes into the input tag, or replaces them all when
    /// `overwrite` is set. A `class` entry replaces the explicit classes.
    #[must_use]
    pub fn field_attributes(mut self, attrs: &Attributes, overwrite: bool) -> Self {
        let mut attrs = attrs.clone();
        let class = attrs.get("class").map(class_list);
        attrs.remove("class");

        if overwrite {
            self.config.field = attrs;
            self.field_classes = class.unwrap_or_default();
        } else {
            self.config.field.merge(&attrs);
            if let Some(class) = class {
                self.field_classes = class;
            }
        }
        self
    }

    /// Hides the label, keeping it for screen readers.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.config.label.set("class", "sr-only");
        self.show_label = false;
        self
    }

    /// Sets the input placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.field.set("placeholder", placeholder);
        self
    }

    /// Uses the current label text as placeholder.
    #[must_use]
    pub fn placeholder_from_label(self) -> Self {
        let label = self.label.clone();
        self.placeholder(label)
    }

    /// Hides the label and shows its text as placeholder instead.
    #[must_use]
    pub fn only_placeholder(self) -> Self {
        self.no_label().placeholder_from_label()
    }

    /// Ignores validation errors.
    #[must_use]
    pub fn no_feedback(mut self) -> Self {
        self.feedback = Feedback::Disabled;
        self
    }

    /// Shows the error state without the error message.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.feedback = Feedback::Silent;
        self
    }

    /// Sets help text below the input. Replaces [`after`](Self::after).
    #[must_use]
    pub fn help(self, text: &str) -> Self {
        self.after(format!(r#"<small class="help-block">{text}</small>"#))
    }

    /// Sets a `data-*` attribute on the input.
    #[must_use]
    pub fn data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.config.field.set(format!("data-{key}"), value);
        self
    }

    /// Sets content rendered before the group wrapper.
    #[must_use]
    pub fn before_group(mut self, content: impl Into<String>) -> Self {
        self.before_group = Some(content.into());
        self
    }

    /// Sets content rendered inside the group, before the label.
    #[must_use]
    pub fn before_label(mut self, content: impl Into<String>) -> Self {
        self.config.before_label = Some(content.into());
        self
    }

    /// Sets content rendered between the label and the input.
    #[must_use]
    pub fn before(mut self, content: impl Into<String>) -> Self {
        self.config.before = Some(content.into());
        self
    }

    /// Sets content rendered after the group wrapper.
    #[must_use]
    pub fn after_group(mut self, content: impl Into<String>) -> Self {
        self.after_group = Some(content.into());
        self
    }

    /// Sets content rendered inside the group, after the input.
    #[must_use]
    pub fn after(mut self, content: impl Into<String>) -> Self {
        self.config.after = Some(content.into());
        self
    }

    /// Sets the input-group addon before the input.
    #[must_use]
    pub fn prepend(mut self, content: impl Into<String>) -> Self {
        self.config.input_group.before = Some(content.into());
        self
    }

    /// Sets the input-group addon after the input.
    #[must_use]
    pub fn append(mut self, content: impl Into<String>) -> Self {
        self.config.input_group.after = Some(content.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self
    }

    /// Sets the selected option. Alias of [`value`](Self::value).
    #[must_use]
    pub fn selected(self, value: impl Into<String>) -> Self {
        self.value(value)
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    /// Sets the prefix prepended to the name to form the id.
    #[must_use]
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.id_prefix = Some(prefix.into());
        self
    }

    /// Replaces the group classes, dropping the default `form-group <type>`.
    #[must_use]
    pub fn set_group_class(mut self, class: impl AsRef<str>) -> Self {
        self.default_group_class = false;
        self.group_classes = class_list(class.as_ref());
        self
    }

    /// Adds classes to the group.
    #[must_use]
    pub fn add_group_class(mut self, class: impl AsRef<str>) -> Self {
        self.group_classes.extend(class_list(class.as_ref()));
        self
    }

    /// Replaces the input classes, dropping the default `form-control`.
    #[must_use]
    pub fn set_class(mut self, class: impl AsRef<str>) -> Self {
        self.default_class = false;
        self.field_classes = class_list(class.as_ref());
        self
    }

    /// Adds classes to the input.
    #[must_use]
    pub fn add_class(mut self, class: impl AsRef<str>) -> Self {
        self.field_classes.extend(class_list(class.as_ref()));
        self
    }

    /// Sets select options as `(value, label)` pairs.
    #[must_use]
    pub fn options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.config.options = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Sets the input tab index.
    #[must_use]
    pub fn tabindex(mut self, tabindex: i32) -> Self {
        self.config.field.set("tabindex", tabindex.to_string());
        self
    }

    /// Sets the textarea width in columns.
    #[must_use]
    pub fn cols(mut self, cols: u32) -> Self {
        self.config.field.set("cols", cols.to_string());
        self
    }

    /// Sets the textarea height in rows.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.config.field.set("rows", rows.to_string());
        self
    }

    /// Marks a checkbox or radio as checked.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.config.checked = checked;
        self
    }

    /// Toggles the `disabled` marker.
    #[must_use]
    pub fn disabled(self, disabled: bool) -> Self {
        self.flag("disabled", disabled)
    }

    /// Toggles the `required` marker.
    #[must_use]
    pub fn required(self, required: bool) -> Self {
        self.flag("required", required)
    }

    /// Toggles the `readonly` marker.
    #[must_use]
    pub fn readonly(self, readonly: bool) -> Self {
        self.flag("readonly", readonly)
    }

    /// Toggles the `multiple` marker.
    #[must_use]
    pub fn multiple(self, multiple: bool) -> Self {
        self.flag("multiple", multiple)
    }

    fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.config.field.set_flag(key);
        } else {
            self.config.field.remove(key);
        }
        self
    }

    fn default_class(&self) -> Option<&'static str> {
        (self.default_class && !self.field_type.is_checkable()).then_some("form-control")
    }

    fn resolved_id(&self) -> String {
        match self.config.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!(
                "{}{}",
                self.config.id_prefix.as_deref().unwrap_or(""),
                self.name.as_deref().unwrap_or("")
            ),
        }
    }

    /// Renders the field without validation feedback.
    pub fn to_html(&self) -> String {
        self.render(&HtmlRenderer::new(), None)
    }

    /// Renders the field, showing feedback for errors found in `errors`.
    pub fn to_html_with(&self, errors: &dyn ErrorBag) -> String {
        self.render(&HtmlRenderer::new(), Some(errors))
    }

    /// Renders the field through `renderer`.
    ///
    /// A missing or empty error bag means no errors.
    pub fn render<R>(&self, renderer: &R, errors: Option<&dyn ErrorBag>) -> String
    where
        R: FieldRenderer + ?Sized,
    {
        let name = self.name.as_deref().unwrap_or("");
        trace!(name, field_type = %self.field_type, "Rendering field");

        let mut field_attrs = self.config.field.clone();
        field_attrs.remove("class");
        let classes: Vec<&str> = self
            .default_class()
            .into_iter()
            .chain(self.field_classes.iter().map(String::as_str))
            .collect();
        if !classes.is_empty() {
            field_attrs.set("class", classes.join(" "));
        }

        let id = self.resolved_id();
        if !id.is_empty() && !field_attrs.contains("id") {
            field_attrs.set("id", &id);
        }

        let mut group_class: Vec<String> = if self.default_group_class {
            vec!["form-group".to_string(), self.field_type.to_string()]
        } else {
            Vec::new()
        };
        group_class.extend(self.group_classes.iter().cloned());

        let mut after = self.config.after.clone().unwrap_or_default();
        if self.feedback != Feedback::Disabled && !name.is_empty() {
            if let Some(errors) = errors.filter(|e| !e.is_empty()) {
                let key = validation_key(name);
                if errors.has(&key) {
                    debug!(key = key.as_str(), "Field has validation errors");
                    group_class.push("has-error".to_string());
                    group_class.push("has-feedback".to_string());

                    after.push_str(FEEDBACK_ICON);
                    if self.feedback != Feedback::Silent {
                        if let Some(message) = errors.first(&key) {
                            after.push_str(&format!(
                                r#"<p class="help-block">{}</p>"#,
                                html_escape(message)
                            ));
                        }
                    }
                }
            }
        }

        let label = self.render_label(renderer, &id);
        let input = self.render_input(renderer, name, &field_attrs);
        let inline = self.field_type.is_checkable() && self.show_label;

        let mut inner = String::new();
        inner.push_str(self.config.before_label.as_deref().unwrap_or(""));
        if inline {
            inner.push_str(&label.render_wrapping(&input));
        } else {
            inner.push_str(&label.render());
        }
        inner.push_str(self.config.before.as_deref().unwrap_or(""));

        let input = if inline { "" } else { input.as_str() };
        if self.config.input_group.is_empty() {
            inner.push_str(input);
        } else {
            inner.push_str(&render_input_group(&self.config.input_group, input));
        }
        inner.push_str(&after);

        let group_class = group_class.join(" ");
        let group = html! { div.class(#group_class) }.raw(&inner).render();

        format!(
            "{}{group}{}",
            self.before_group.as_deref().unwrap_or(""),
            self.after_group.as_deref().unwrap_or("")
        )
    }

    fn render_label<R>(&self, renderer: &R, id: &str) -> LabelTag
    where
        R: FieldRenderer + ?Sized,
    {
        let mut attrs = self.config.label.clone();
        let for_id = attrs.get("for").map_or_else(|| id.to_string(), str::to_string);
        attrs.remove("for");
        renderer.label(&for_id, &self.label, &attrs)
    }

    fn render_input<R>(&self, renderer: &R, name: &str, attrs: &Attributes) -> String
    where
        R: FieldRenderer + ?Sized,
    {
        let value = self.config.value.as_deref();
        match self.field_type {
            FieldType::Password => renderer.password(name, attrs),
            FieldType::File => renderer.file(name, attrs),
            FieldType::Select => renderer.select(name, &self.config.options, value, attrs),
            FieldType::Checkbox => {
                renderer.checkbox(name, value.unwrap_or("1"), self.config.checked, attrs)
            }
            FieldType::Radio => {
                renderer.radio(name, value.unwrap_or("1"), self.config.checked, attrs)
            }
            FieldType::Textarea => renderer.textarea(name, value, attrs),
            other => renderer.input(other, name, value, attrs),
        }
    }
}

fn render_input_group(group: &InputGroup, input: &str) -> String {
    let before = group.before.as_deref();
    let after = group.after.as_deref();

    html! { div.class("input-group") }
        .when(before.is_some(), |d| {
            d.child::<Div, _>(|a| addon(a, before.unwrap_or("")))
        })
        .raw(input)
        .when(after.is_some(), |d| {
            d.child::<Div, _>(|a| addon(a, after.unwrap_or("")))
        })
        .render()
}

fn addon(div: Element<Div>, content: &str) -> Element<Div> {
    let class = if content.contains("button") {
        "input-group-btn"
    } else {
        "input-group-addon"
    };
    div.class(class).raw(content)
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}
