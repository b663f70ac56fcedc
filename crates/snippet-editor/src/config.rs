//! Endpoint and behaviour configuration for the snippet form.

use crate::http::Method;

/// The three requests the form can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Store a new snippet.
    Create,
    /// Change an existing snippet.
    Update,
    /// Remove an existing snippet.
    Delete,
}

impl Operation {
    /// Returns the HTTP method for this operation.
    pub const fn method(self) -> Method {
        match self {
            Self::Create => Method::Post,
            Self::Update => Method::Put,
            Self::Delete => Method::Delete,
        }
    }

    /// Returns the operation name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a [`SnippetForm`](crate::SnippetForm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Path of the create endpoint.
    pub create_path: String,
    /// Path of the update endpoint.
    pub update_path: String,
    /// Path of the delete endpoint.
    pub delete_path: String,
    /// Where to navigate after a successful request.
    pub listing_path: String,
    /// Whether a failed request is shown in the rendered form.
    pub surface_request_errors: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            create_path: "/api/createSnippet".to_string(),
            update_path: "/api/updateSnippet".to_string(),
            delete_path: "/api/deleteSnippet".to_string(),
            listing_path: "/".to_string(),
            surface_request_errors: false,
        }
    }
}

impl EditorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path prefix shared by all three endpoints, e.g. `/api`.
    #[must_use]
    pub fn api_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        self.create_path = format!("{prefix}/createSnippet");
        self.update_path = format!("{prefix}/updateSnippet");
        self.delete_path = format!("{prefix}/deleteSnippet");
        self
    }

    /// Sets where to navigate after success.
    #[must_use]
    pub fn listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    /// Shows failed requests in the rendered form.
    #[must_use]
    pub fn surface_request_errors(mut self, enabled: bool) -> Self {
        self.surface_request_errors = enabled;
        self
    }

    /// Returns the path for an operation.
    pub fn path(&self, operation: Operation) -> &str {
        match operation {
            Operation::Create => &self.create_path,
            Operation::Update => &self.update_path,
            Operation::Delete => &self.delete_path,
        }
    }
}
