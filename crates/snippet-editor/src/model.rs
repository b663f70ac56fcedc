//! Snippet records and the request payloads built from them.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Backend-assigned identifier of a stored snippet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

impl SnippetId {
    /// Wraps an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Languages a snippet can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    JavaScript,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
}

impl Language {
    /// All languages, in the order they are offered.
    pub const ALL: [Self; 3] = [Self::JavaScript, Self::Html, Self::Css];

    /// Returns the wire and display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Html => "HTML",
            Self::Css => "CSS",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl std::fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Content of a snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetData {
    pub name: String,
    pub language: Language,
    pub description: String,
    pub code: String,
}

/// A stored snippet as returned by the backend: `{"id": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub data: SnippetData,
}

impl Snippet {
    /// Creates a snippet record.
    pub fn new(id: impl Into<String>, data: SnippetData) -> Self {
        Self {
            id: SnippetId::new(id),
            data,
        }
    }
}

/// Reads a snippet record from a JSON file.
pub fn load_snippet(path: &Path) -> Result<Snippet> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPayload {
    pub code: String,
    pub language: Language,
    pub description: String,
    pub name: String,
}

/// Body of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    #[serde(flatten)]
    pub fields: SnippetPayload,
    pub id: SnippetId,
}

/// Body of a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    pub id: SnippetId,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_language_names() {
        assert_eq!("HTML".parse::<Language>(), Ok(Language::Html));
        assert_eq!("CSS".parse::<Language>(), Ok(Language::Css));
        assert_eq!(
            "html".parse::<Language>(),
            Err(UnknownLanguage("html".to_string()))
        );
        assert_eq!(Language::default(), Language::JavaScript);
        assert_eq!(
            serde_json::to_string(&Language::Html).unwrap(),
            r#""HTML""#
        );
    }

    #[test]
    fn test_snippet_document_shape() {
        let snippet: Snippet = serde_json::from_str(
            r#"{"id":"42","data":{"name":"Hi","language":"HTML","description":"d","code":"<p>x</p>"}}"#,
        )
        .unwrap();
        assert_eq!(snippet.id.as_str(), "42");
        assert_eq!(snippet.data.language, Language::Html);
        assert_eq!(snippet.data.code, "<p>x</p>");
    }

    #[test]
    fn test_update_payload_is_flat() {
        let payload = UpdatePayload {
            fields: SnippetPayload {
                code: "a".to_string(),
                language: Language::Css,
                description: "b".to_string(),
                name: "c".to_string(),
            },
            id: SnippetId::new("7"),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "code": "a",
                "language": "CSS",
                "description": "b",
                "name": "c",
                "id": "7",
            })
        );
    }

    #[test]
    fn test_load_snippet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id":"1","data":{{"name":"n","language":"CSS","description":"d","code":"c"}}}}"#
        )
        .unwrap();

        let snippet = load_snippet(file.path()).unwrap();
        assert_eq!(snippet.id, SnippetId::new("1"));
        assert_eq!(snippet.data.language, Language::Css);
    }

    #[test]
    fn test_load_snippet_rejects_unknown_language() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id":"1","data":{{"name":"n","language":"Rust","description":"d","code":"c"}}}}"#
        )
        .unwrap();

        assert!(matches!(
            load_snippet(file.path()),
            Err(crate::error::EditorError::Json(_))
        ));
    }
}
