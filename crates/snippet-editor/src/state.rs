//! Editable field state of a snippet form.

use std::collections::HashMap;
use std::str::FromStr;

use snippet_forms::{FormError, ValidationErrors};

use crate::model::{Language, SnippetData, SnippetPayload};
use crate::validation::validate;

/// The four editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Language,
    Description,
    Code,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Language, Self::Description, Self::Code];

    /// Returns the form name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Language => "language",
            Self::Description => "description",
            Self::Code => "code",
        }
    }

    /// Returns the label shown next to the field.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Language => "Language",
            Self::Description => "Description",
            Self::Code => "Code",
        }
    }

    /// Returns the message shown when the field is left empty.
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Language => "Language is required",
            Self::Description => "Description is required",
            Self::Code => "Code is required",
        }
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current values of the four fields, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetFormState {
    name: String,
    language: String,
    description: String,
    code: String,
}

impl Default for SnippetFormState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SnippetFormState {
    /// Starts from an existing snippet's content, or from empty fields and
    /// the default language.
    pub fn new(existing: Option<&SnippetData>) -> Self {
        match existing {
            Some(data) => Self {
                name: data.name.clone(),
                language: data.language.as_str().to_string(),
                description: data.description.clone(),
                code: data.code.clone(),
            },
            None => Self {
                name: String::new(),
                language: Language::default().as_str().to_string(),
                description: String::new(),
                code: String::new(),
            },
        }
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Language => &self.language,
            Field::Description => &self.description,
            Field::Code => &self.code,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Language => &mut self.language,
            Field::Description => &mut self.description,
            Field::Code => &mut self.code,
        };
        *slot = value.into();
    }

    /// Returns the values keyed by form name.
    pub fn values(&self) -> HashMap<String, String> {
        Field::ALL
            .into_iter()
            .map(|field| (field.name().to_string(), self.get(field).to_string()))
            .collect()
    }

    /// Validates the fields and builds the request body from them.
    pub fn to_payload(&self) -> Result<SnippetPayload, ValidationErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        let language = self.language.parse::<Language>().map_err(|unknown| {
            let mut errors = ValidationErrors::new();
            errors.add(Field::Language.name(), unknown.to_string());
            errors
        })?;

        Ok(SnippetPayload {
            code: self.code.clone(),
            language,
            description: self.description.clone(),
            name: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> SnippetData {
        SnippetData {
            name: "Hi".to_string(),
            language: Language::Html,
            description: "d".to_string(),
            code: "<p>x</p>".to_string(),
        }
    }

    #[test]
    fn test_empty_state() {
        let state = SnippetFormState::new(None);
        assert_eq!(state.get(Field::Name), "");
        assert_eq!(state.get(Field::Language), "JavaScript");
        assert_eq!(state.get(Field::Description), "");
        assert_eq!(state.get(Field::Code), "");
    }

    #[test]
    fn test_prefilled_state() {
        let state = SnippetFormState::new(Some(&hello()));
        assert_eq!(state.get(Field::Name), "Hi");
        assert_eq!(state.get(Field::Language), "HTML");
        assert_eq!(state.get(Field::Description), "d");
        assert_eq!(state.get(Field::Code), "<p>x</p>");
    }

    #[test]
    fn test_set_and_values() {
        let mut state = SnippetFormState::default();
        state.set(Field::Code, "a { color: red }");
        state.set(Field::Language, "CSS");

        let values = state.values();
        assert_eq!(values.len(), 4);
        assert_eq!(values["code"], "a { color: red }");
        assert_eq!(values["language"], "CSS");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("description".parse::<Field>().unwrap(), Field::Description);
        assert!(matches!(
            "id".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "id"
        ));
    }

    #[test]
    fn test_to_payload() {
        let payload = SnippetFormState::new(Some(&hello())).to_payload().unwrap();
        assert_eq!(payload.name, "Hi");
        assert_eq!(payload.language, Language::Html);
        assert_eq!(payload.code, "<p>x</p>");
    }

    #[test]
    fn test_to_payload_reports_every_empty_field() {
        let mut state = SnippetFormState::default();
        state.set(Field::Language, "");
        let errors = state.to_payload().unwrap_err();
        for field in Field::ALL {
            assert_eq!(errors.first(field.name()), Some(field.required_message()));
        }
    }
}
