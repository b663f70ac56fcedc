//! Form widgets for rendering HTML inputs.

mod bootstrap;

pub use bootstrap::{BootstrapSelect, BootstrapTextInput, BootstrapTextarea};

use std::collections::BTreeMap;

/// Attributes that can be applied to a widget.
///
/// Kept ordered so rendered markup is stable.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders every attribute except `class` and `id`, each with a leading space.
    pub(crate) fn extra_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| k.as_str() != "class" && k.as_str() != "id")
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for form widgets that render HTML inputs.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }

    /// Whether the widget renders without a visible label.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// A hidden input widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let extra_attrs = if attrs.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.to_html())
        };
        format!(r#"<input type="hidden" name="{name}"{value_attr}{extra_attrs}>"#)
    }

    fn input_type(&self) -> &str {
        "hidden"
    }

    fn is_hidden(&self) -> bool {
        true
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_input() {
        let widget = HiddenInput;
        let html = widget.render("id", Some("42"), &WidgetAttrs::new());
        assert_eq!(html, r#"<input type="hidden" name="id" value="42">"#);
        assert!(widget.is_hidden());
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<p>x</p>"), "&lt;p&gt;x&lt;/p&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_widget_attrs_are_ordered() {
        let attrs = WidgetAttrs::new()
            .with("required", "required")
            .with("class", "form-control")
            .with("id", "id_name");
        assert_eq!(
            attrs.to_html(),
            r#"class="form-control" id="id_name" required="required""#
        );
        assert_eq!(attrs.extra_html(), r#" required="required""#);
    }
}
