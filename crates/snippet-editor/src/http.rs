//! Request and response types exchanged with the snippet API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RequestError;

/// HTTP methods used by the snippet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// POST method
    Post,
    /// PUT method
    Put,
    /// DELETE method
    Delete,
}

impl Method {
    /// Returns the method as a string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing API request. `path` is relative to the API origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path, e.g. `/api/createSnippet`.
    pub path: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Request body.
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a request carrying `payload` as a JSON body.
    pub fn json<T: Serialize>(
        method: Method,
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, RequestError> {
        let body = serde_json::to_vec(payload)?;
        Ok(Self::new(method, path)
            .header("Content-Type", "application/json")
            .body(body))
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Gets a header value.
    pub fn get_header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Parses the body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// What came back from the API. Only the status is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
}

impl ApiResponse {
    /// Creates a response with the given status.
    pub const fn new(status: u16) -> Self {
        Self { status }
    }

    /// Creates a 200 OK response.
    pub const fn ok() -> Self {
        Self::new(200)
    }

    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_request() {
        let req = ApiRequest::json(
            Method::Delete,
            "/api/deleteSnippet",
            &serde_json::json!({"id": "42"}),
        )
        .unwrap();

        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/api/deleteSnippet");
        assert_eq!(req.get_header("content-type"), Some("application/json"));
        assert_eq!(
            req.json_body::<serde_json::Value>().unwrap(),
            serde_json::json!({"id": "42"})
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
    }

    #[test]
    fn test_response_status() {
        assert!(ApiResponse::ok().is_success());
        assert!(ApiResponse::new(204).is_success());
        assert!(!ApiResponse::new(500).is_success());
        assert!(!ApiResponse::new(302).is_success());
    }
}
