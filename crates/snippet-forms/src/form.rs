//! Field definitions, validation over submitted values, and form rendering.

use std::collections::HashMap;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul};

use crate::error::{ValidationErrors, NON_FIELD_ERRORS};
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Initial value.
    pub initial: Option<String>,
    /// Validators.
    pub validators: Vec<Box<dyn Validator>>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            initial: None,
            validators: Vec::new(),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Runs the validators against a value.
    ///
    /// Stops at the first failing validator, so a field reports at most
    /// one message.
    pub fn clean(&self, value: &str) -> Result<(), String> {
        self.validators.iter().try_for_each(|v| v.validate(value))
    }
}

/// Validates submitted values against a set of field definitions.
///
/// A field with no submitted value is validated as the empty string.
pub fn validate_fields(
    fields: &[FormFieldDef],
    values: &HashMap<String, String>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in fields {
        let value = values.get(&field.name).map_or("", String::as_str);
        if let Err(message) = field.clean(value) {
            errors.add(&field.name, message);
        }
    }
    errors
}

/// A control rendered after the fields of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// A submit button.
    Submit {
        /// Button text.
        label: String,
    },
    /// A link styled as a button.
    Link {
        /// Link text.
        label: String,
        /// Link target.
        href: String,
    },
    /// A plain button that does not submit the form.
    Button {
        /// Button text.
        label: String,
        /// Value of the `name` attribute.
        name: String,
        /// Extra attributes, e.g. `data-*` hooks.
        attrs: Vec<(String, String)>,
    },
}

impl FormAction {
    /// Creates a submit button.
    pub fn submit(label: impl Into<String>) -> Self {
        Self::Submit {
            label: label.into(),
        }
    }

    /// Creates a link action.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Creates a non-submitting button.
    pub fn button(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds an attribute to a [`FormAction::Button`]. Other actions are unchanged.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Button { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    fn render(&self) -> String {
        match self {
            Self::Submit { label } => html! {
                button.type_("submit").class("btn btn-primary me-2") { #label }
            }
            .render(),
            Self::Link { label, href } => html! {
                a.href(#href).class("btn btn-outline-secondary me-2") { #label }
            }
            .render(),
            Self::Button { label, name, attrs } => {
                let mut button = html! {
                    button.type_("button").class("btn btn-outline-danger me-2") { #label }
                }
                .attr("name", name.as_str());
                for (key, value) in attrs {
                    button = button.attr(key.clone(), value.as_str());
                }
                button.render()
            }
        }
    }
}

/// Renders a form field with Bootstrap 5 styling.
pub fn render_bootstrap_field(
    field: &FormFieldDef,
    value: Option<&str>,
    errors: &[String],
) -> String {
    let actual_value = value.or(field.initial.as_deref());

    if field.widget.is_hidden() {
        return field.widget.render(&field.name, actual_value, &field.attrs);
    }

    let id = format!("id_{}", field.name);
    let has_errors = !errors.is_empty();

    let required_marker = if field.required { " *" } else { "" };
    let label_text = format!("{}{}", field.label, required_marker);

    let mut attrs = field.attrs.clone();
    attrs.set("id", &id);

    if has_errors {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
    }

    if field.required {
        attrs.set("required", "required");
    }

    let widget_html = field.widget.render(&field.name, actual_value, &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .children(errors, |error, div: Element<Div>| {
            div.class("invalid-feedback d-block").text(error)
        })
        .render()
}

/// Renders a complete form with Bootstrap 5 styling.
pub fn render_bootstrap_form(
    fields: &[FormFieldDef],
    values: &HashMap<String, String>,
    errors: &ValidationErrors,
    action: &str,
    method: &str,
    actions: &[FormAction],
) -> String {
    let mut form = html! {
        form.action(#action).method(#method)
    };

    if let Some(form_errors) = errors.get(NON_FIELD_ERRORS) {
        form = form.child::<Div, _>(|d| {
            d.class("alert alert-danger")
                .attr("role", "alert")
                .child::<Ul, _>(|ul| {
                    ul.class("mb-0")
                        .children(form_errors.iter(), |e, li: Element<Li>| li.text(e))
                })
        });
    }

    for field in fields {
        let value = values.get(&field.name).map(String::as_str);
        let field_errors = errors.get(&field.name).cloned().unwrap_or_default();
        let field_html = render_bootstrap_field(field, value, &field_errors);
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let actions_html: String = actions.iter().map(FormAction::render).collect();
    form = form.child::<Div, _>(|d| d.class("d-flex").raw(&actions_html));

    form.render()
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}
