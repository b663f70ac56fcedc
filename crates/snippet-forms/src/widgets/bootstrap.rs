//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

fn widget_id(name: &str, attrs: &WidgetAttrs) -> String {
    attrs
        .get("id")
        .cloned()
        .unwrap_or_else(|| format!("id_{name}"))
}

fn widget_class(base: &str, attrs: &WidgetAttrs) -> String {
    match attrs.get("class") {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

fn placeholder_attr(placeholder: Option<&String>) -> String {
    placeholder
        .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
        .unwrap_or_default()
}

/// Bootstrap 5 single-line text input widget.
#[derive(Debug, Clone, Default)]
pub struct BootstrapTextInput {
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let placeholder_attr = placeholder_attr(self.placeholder.as_ref());
        let id = widget_id(name, attrs);
        let class = widget_class("form-control", attrs);
        let extra_attrs = attrs.extra_html();

        format!(
            r#"<input type="text" class="{class}" id="{id}" name="{name}"{value_attr}{placeholder_attr}{extra_attrs}>"#
        )
    }
}

/// Bootstrap 5 textarea widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    /// Number of rows.
    pub rows: usize,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Whether the user may resize the textarea.
    pub resizable: bool,
}

impl Default for BootstrapTextarea {
    fn default() -> Self {
        Self {
            rows: 4,
            placeholder: None,
            resizable: true,
        }
    }
}

impl BootstrapTextarea {
    /// Creates a new textarea with the specified rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Disables user resizing.
    #[must_use]
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        let id = widget_id(name, attrs);
        let placeholder_attr = placeholder_attr(self.placeholder.as_ref());
        let class = widget_class("form-control", attrs);
        let style_attr = if self.resizable {
            ""
        } else {
            r#" style="resize: none;""#
        };
        let extra_attrs = attrs.extra_html();

        format!(
            r#"<textarea class="{class}" id="{id}" name="{name}" rows="{}"{placeholder_attr}{style_attr}{extra_attrs}>{content}</textarea>"#,
            self.rows
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// Bootstrap 5 select widget.
///
/// There is no blank option, so the browser always submits one of the
/// choices.
#[derive(Debug, Clone, Default)]
pub struct BootstrapSelect {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
}

impl BootstrapSelect {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        }
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        use std::fmt::Write as _;

        let id = widget_id(name, attrs);
        let class = widget_class("form-select", attrs);
        let extra_attrs = attrs.extra_html();

        let mut options = String::new();
        for (opt_value, label) in &self.choices {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { " selected" } else { "" };
            let _ = write!(
                options,
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            );
        }

        format!(r#"<select class="{class}" id="{id}" name="{name}"{extra_attrs}>{options}</select>"#)
    }

    fn input_type(&self) -> &str {
        "select"
    }
}
